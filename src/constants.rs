//! Common constants used throughout rnta-windows.

/// Target platform key, also the name of the platform output directory
pub const PLATFORM: &str = "windows";

/// Directory holding installed node modules
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Native framework module the generated project builds against
pub const REACT_NATIVE_MODULE: &str = "react-native-windows";

/// Module that ships the project template
pub const TEST_APP_MODULE: &str = "react-native-test-app";

/// Intermediate output directory, created inside `node_modules`
pub const GENERATED_DIR: &str = ".generated";

/// Directory inside the generated project receiving app resources
pub const BUNDLE_DIR: &str = "Bundle";

/// Name of the project directory inside the template
pub const PROJECT_DIR: &str = "ReactTestApp";

/// App manifest file name
pub const MANIFEST_FILE: &str = "app.json";

/// Project-definition files copied from the template
pub const PROJECT_FILES: [&str; 6] = [
    "ReactTestApp.vcxproj",
    "PropertySheet.props",
    "Package.appxmanifest",
    "ReactTestApp.vcxproj.filters",
    "ReactTestApp_TemporaryKey.pfx",
    "packages.config",
];

/// Solution file, located next to the project directory in the template
pub const SOLUTION_FILE: &str = "ReactTestApp.sln";

/// Files with these extensions are copied byte-for-byte
pub const BINARY_EXTENSIONS: [&str; 2] = [".png", ".pfx"];

/// Placeholder tokens recognised in template files
pub mod placeholders {
    pub const MANIFEST_ROOT_PATH: &str = "$(ManifestRootPath)";
    pub const REACT_NATIVE_MODULE_PATH: &str = "$(ReactNativeModulePath)";
    pub const SOURCE_FILES_PATH: &str = "$(SourceFilesPath)";
    pub const PROJECT_PATH: &str = "$(ReactTestAppProjectPath)";
}
