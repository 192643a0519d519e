//! Generation of the Windows test app project.
//!
//! The run is a fixed pipeline:
//! 1. [`Anchors::resolve`] locates the modules and the app manifest. Nothing
//!    is written if a required anchor is missing.
//! 2. The output directories are created.
//! 3. Resources declared in the manifest are copied into the bundle
//!    directory.
//! 4. The project-definition files and the solution file are copied from the
//!    template, with path placeholders computed relative to each file's own
//!    destination so the output keeps working wherever the tree is moved.

use log::{debug, info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::anchor::find_closest_path;
use crate::config::ScaffoldConfig;
use crate::constants::placeholders;
use crate::copier::FileCopier;
use crate::error::{Error, Result};
use crate::instantiator::copy_and_replace_all;
use crate::manifest::read_resources;
use crate::paths::{normalize_path, relative_path};
use crate::report::CopyReport;
use crate::substitution::SubstitutionMap;

/// Absolute locations discovered from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    /// The project being generated for; the solution file goes below it.
    pub project_root: PathBuf,
    /// Closest `node_modules`; generated files live inside it.
    pub node_modules: PathBuf,
    pub react_native_module: PathBuf,
    pub test_app_module: PathBuf,
    /// The app manifest file.
    pub manifest: PathBuf,
}

impl Anchors {
    /// Searches upward from `project_root` for every anchor `config` names.
    ///
    /// When no `node_modules` directory is found on its own, the one holding
    /// the native framework module is used.
    ///
    /// # Errors
    /// * `Error::DestinationError` if `project_root` is not a directory
    /// * `Error::ModuleNotFoundError` if the framework or template module is missing
    /// * `Error::ManifestNotFoundError` if no manifest is found
    pub fn resolve<P: AsRef<Path>>(project_root: P, config: &ScaffoldConfig) -> Result<Self> {
        let project_root = project_root.as_ref();
        if !project_root.is_dir() {
            return Err(Error::DestinationError { path: project_root.display().to_string() });
        }
        let project_root = normalize_path(std::path::absolute(project_root)?);

        let locate = |target: &Path| {
            find_closest_path(&project_root, target).map(|found| normalize_path(project_root.join(found)))
        };

        let react_native_module = locate(config.module_anchor(&config.react_native_module).as_path())
            .ok_or_else(|| Error::ModuleNotFoundError { module: config.react_native_module.clone() })?;
        let test_app_module = locate(config.module_anchor(&config.test_app_module).as_path())
            .ok_or_else(|| Error::ModuleNotFoundError { module: config.test_app_module.clone() })?;
        let node_modules = locate(Path::new(&config.node_modules_dir))
            .or_else(|| react_native_module.parent().map(Path::to_path_buf))
            .ok_or_else(|| {
                Error::ConfigError(format!("could not locate '{}'", config.node_modules_dir))
            })?;
        let manifest = locate(Path::new(&config.manifest_file)).ok_or_else(|| {
            Error::ManifestNotFoundError {
                manifest: config.manifest_file.clone(),
                project_root: project_root.display().to_string(),
            }
        })?;

        debug!("Resolved anchors: {:?}", (&node_modules, &react_native_module, &test_app_module));

        Ok(Self { project_root, node_modules, react_native_module, test_app_module, manifest })
    }

    /// Directory containing the manifest; resource paths are relative to it.
    pub fn manifest_dir(&self) -> &Path {
        self.manifest.parent().unwrap_or(&self.project_root)
    }
}

/// One explicitly listed file to copy, with the substitutions computed for its
/// destination.
#[derive(Debug, Clone)]
pub struct FileMapping {
    pub source: PathBuf,
    pub destination_root: PathBuf,
    pub relative_destination: PathBuf,
    pub substitutions: SubstitutionMap,
}

impl FileMapping {
    pub fn destination(&self) -> PathBuf {
        self.destination_root.join(&self.relative_destination)
    }
}

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub copy: CopyReport,
    /// Manifest resources that did not exist on disk.
    pub missing_resources: Vec<String>,
}

/// Copies the project template for one set of resolved anchors.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    config: ScaffoldConfig,
    anchors: Anchors,
    copier: FileCopier,
}

impl Scaffolder {
    pub fn new(config: ScaffoldConfig, anchors: Anchors) -> Self {
        let copier = FileCopier::new(config.binary_extensions());
        Self { config, anchors, copier }
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Platform directory of the template module.
    pub fn template_root(&self) -> PathBuf {
        self.anchors.test_app_module.join(&self.config.platform)
    }

    /// Template directory holding the project sources.
    pub fn source_files_dir(&self) -> PathBuf {
        self.template_root().join(&self.config.project_dir)
    }

    /// `node_modules/.generated/<platform>/<project>`
    pub fn project_output_dir(&self) -> PathBuf {
        self.anchors
            .node_modules
            .join(&self.config.generated_dir)
            .join(&self.config.platform)
            .join(&self.config.project_dir)
    }

    pub fn bundle_output_dir(&self) -> PathBuf {
        self.project_output_dir().join(&self.config.bundle_dir)
    }

    /// `<project root>/<platform>`, where the solution file is written.
    pub fn solution_output_dir(&self) -> PathBuf {
        self.anchors.project_root.join(&self.config.platform)
    }

    /// Runs the whole pipeline.
    ///
    /// Per-file copy failures do not stop the run; they are collected in the
    /// returned report.
    ///
    /// # Errors
    /// * `Error::CopyError` if an output directory cannot be created
    /// * `Error::ManifestError` if the manifest is not valid JSON
    pub fn run(&self) -> Result<ScaffoldReport> {
        self.prepare_output_dirs()?;

        let mut report = self.copy_resources()?;
        report.copy.merge(self.copy_mappings(&self.file_mappings()?));

        info!(
            "Generated project in '{}' ({})",
            self.project_output_dir().display(),
            report.copy
        );
        Ok(report)
    }

    /// Creates the bundle and solution directories. Existing directories are
    /// left as they are.
    pub fn prepare_output_dirs(&self) -> Result<()> {
        for dir in [self.bundle_output_dir(), self.solution_output_dir()] {
            fs::create_dir_all(&dir).map_err(|source| Error::CopyError { path: dir, source })?;
        }
        Ok(())
    }

    /// Copies every resource the manifest declares into the bundle directory.
    /// Resources missing on disk are reported and skipped.
    pub fn copy_resources(&self) -> Result<ScaffoldReport> {
        let mut report = ScaffoldReport::default();
        let Some(resources) = read_resources(&self.anchors.manifest, &self.config.platform)? else {
            return Ok(report);
        };

        let no_substitutions = SubstitutionMap::new();
        let project_output_dir = self.project_output_dir();

        for resource in resources {
            let source = normalize_path(self.anchors.manifest_dir().join(&resource));
            let Some(name) = source.file_name().filter(|_| source.exists()) else {
                warn!("Resource with path {} was not found", resource);
                report.missing_resources.push(resource);
                continue;
            };

            let relative_destination = Path::new(&self.config.bundle_dir).join(name);
            match copy_and_replace_all(
                &self.copier,
                &source,
                &project_output_dir,
                relative_destination,
                &no_substitutions,
            ) {
                Ok(copied) => report.copy.merge(copied),
                Err(err) => report.copy.record(Err(err)),
            }
        }

        Ok(report)
    }

    /// The project files followed by the solution file.
    ///
    /// # Errors
    /// * `Error::PatternError` if a placeholder map cannot be built
    pub fn file_mappings(&self) -> Result<Vec<FileMapping>> {
        let source_files_dir = self.source_files_dir();
        let project_output_dir = self.project_output_dir();

        let mut mappings: Vec<FileMapping> = self
            .config
            .project_files
            .iter()
            .map(|file| {
                let relative_destination = PathBuf::from(file);
                let destination_dir = destination_dir(&project_output_dir, &relative_destination);
                Ok(FileMapping {
                    source: source_files_dir.join(file),
                    destination_root: project_output_dir.clone(),
                    relative_destination,
                    substitutions: self.project_file_substitutions(&destination_dir)?,
                })
            })
            .collect::<Result<_>>()?;

        let relative_destination = Path::new(&self.config.platform).join(&self.config.solution_file);
        let solution_dir = destination_dir(&self.anchors.project_root, &relative_destination);
        mappings.push(FileMapping {
            source: self.template_root().join(&self.config.solution_file),
            destination_root: self.anchors.project_root.clone(),
            relative_destination,
            substitutions: self.solution_substitutions(&solution_dir)?,
        });

        Ok(mappings)
    }

    /// Placeholders for a project file written to `destination_dir`.
    pub fn project_file_substitutions(&self, destination_dir: &Path) -> Result<SubstitutionMap> {
        SubstitutionMap::from_literals([
            (placeholders::MANIFEST_ROOT_PATH, relative_to(destination_dir, self.anchors.manifest_dir())),
            (
                placeholders::REACT_NATIVE_MODULE_PATH,
                relative_to(destination_dir, &self.anchors.react_native_module),
            ),
            (placeholders::SOURCE_FILES_PATH, relative_to(destination_dir, &self.source_files_dir())),
        ])
    }

    /// Placeholders for a solution file written to `destination_dir`.
    pub fn solution_substitutions(&self, destination_dir: &Path) -> Result<SubstitutionMap> {
        SubstitutionMap::from_literals([
            (
                placeholders::REACT_NATIVE_MODULE_PATH,
                relative_to(destination_dir, &self.anchors.react_native_module),
            ),
            (placeholders::PROJECT_PATH, relative_to(destination_dir, &self.project_output_dir())),
        ])
    }

    /// Copies all `mappings` in parallel and waits for every one of them.
    ///
    /// Destination directories are created up front, one after another; a
    /// mapping whose directory cannot be created is reported and not copied.
    pub fn copy_mappings(&self, mappings: &[FileMapping]) -> CopyReport {
        let mut report = CopyReport::new();
        let mut ready = Vec::with_capacity(mappings.len());
        for mapping in mappings {
            let destination = mapping.destination();
            let created = destination.parent().map(fs::create_dir_all);
            match created {
                Some(Err(source)) => report.record(Err(Error::CopyError { path: destination, source })),
                _ => ready.push(mapping),
            }
        }

        let copied: CopyReport = ready
            .par_iter()
            .map(|mapping| {
                self.copier.copy(
                    &mapping.source,
                    &mapping.destination_root,
                    &mapping.relative_destination,
                    &mapping.substitutions,
                )
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect();
        report.merge(copied);
        report
    }
}

fn destination_dir(root: &Path, relative_destination: &Path) -> PathBuf {
    root.join(relative_destination)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf())
}

fn relative_to(base: &Path, target: &Path) -> String {
    relative_path(base, target).display().to_string()
}

/// Resolves anchors from `project_root` and runs the scaffolder.
///
/// # Errors
/// * Configuration errors from [`Anchors::resolve`], before anything is written
/// * Errors from [`Scaffolder::run`]
pub fn scaffold<P: AsRef<Path>>(project_root: P, config: ScaffoldConfig) -> Result<ScaffoldReport> {
    let anchors = Anchors::resolve(project_root, &config)?;
    Scaffolder::new(config, anchors).run()
}
