#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PFX_BYTES: &[u8] = &[0x30, 0x82, 0x0a, 0xff, 0x00, 0xfe, b'$', b'(', 0xc3];

/// An app with its node_modules, laid out the way a package manager installs it:
///
/// ```text
/// <tmp>/app.json
/// <tmp>/node_modules/react-native-windows/
/// <tmp>/node_modules/react-native-test-app/windows/ReactTestApp.sln
/// <tmp>/node_modules/react-native-test-app/windows/ReactTestApp/<project files>
/// ```
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(manifest: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("node_modules/react-native-windows")).unwrap();
        let project = root.join("node_modules/react-native-test-app/windows/ReactTestApp");
        fs::create_dir_all(&project).unwrap();

        fs::write(
            project.join("ReactTestApp.vcxproj"),
            "<Import Project=\"$(ReactNativeModulePath)\\PropertySheets\\React.props\" />\n\
             <ClCompile Include=\"$(SourceFilesPath)\\App.cpp\" />\n\
             <Content Include=\"$(ManifestRootPath)\\app.json\" />\n\
             <Unknown>$(NotAPlaceholder)</Unknown>\n",
        )
        .unwrap();
        fs::write(project.join("PropertySheet.props"), "<ImportGroup />\n").unwrap();
        fs::write(project.join("Package.appxmanifest"), "<Package />\n").unwrap();
        fs::write(
            project.join("ReactTestApp.vcxproj.filters"),
            "<Filter>$(SourceFilesPath)</Filter>\n",
        )
        .unwrap();
        fs::write(project.join("ReactTestApp_TemporaryKey.pfx"), PFX_BYTES).unwrap();
        fs::write(project.join("packages.config"), "<packages />\n").unwrap();
        fs::write(
            project.parent().unwrap().join("ReactTestApp.sln"),
            "Project = \"$(ReactTestAppProjectPath)\\ReactTestApp.vcxproj\"\n\
             Project = \"$(ReactNativeModulePath)\\Microsoft.ReactNative\"\n",
        )
        .unwrap();

        fs::write(root.join("app.json"), manifest).unwrap();

        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn generated_project(&self) -> PathBuf {
        self.root().join("node_modules/.generated/windows/ReactTestApp")
    }

    pub fn bundle(&self) -> PathBuf {
        self.generated_project().join("Bundle")
    }

    pub fn solution(&self) -> PathBuf {
        self.root().join("windows/ReactTestApp.sln")
    }

    pub fn write(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }
}

/// Relative paths of every file and directory below `root`, sorted.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            entry.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
        })
        .collect();
    entries.sort();
    entries
}
