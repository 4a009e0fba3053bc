/// Metadata returned by [`execute_build()`](crate::build::execute_build) after a successful build.
#[derive(Debug, Default)]
pub struct BuildOutput {
    /// The page shell.
    pub shell: String,
    /// Client assets written next to the shell.
    pub assets: Vec<String>,
    /// Files copied from the public directory.
    pub static_files: Vec<String>,
    /// Public files left out because the build writes the same path.
    pub skipped_static_files: Vec<String>,
    pub render_artifact: String,
}

impl BuildOutput {
    pub(crate) fn add_asset(&mut self, file_path: String) {
        self.assets.push(file_path);
    }

    pub(crate) fn add_static_file(&mut self, file_path: String) {
        self.static_files.push(file_path);
    }

    /// Every file written by the build.
    pub fn written_files(&self) -> Vec<&str> {
        std::iter::once(self.shell.as_str())
            .chain(self.assets.iter().map(String::as_str))
            .chain(self.static_files.iter().map(String::as_str))
            .chain(std::iter::once(self.render_artifact.as_str()))
            .collect()
    }
}
