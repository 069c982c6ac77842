//! Hand snippet files to the desktop: open them, or show them in a file manager.

use std::io;
use std::path::Path;

/// Open a file with the system's default handler.
pub fn open_file(path: &Path) -> io::Result<()> {
    open::that_detached(path)
}

/// Show a file in the platform file manager.
///
/// Windows and macOS select the file itself; elsewhere the containing folder
/// is opened.
#[cfg(target_os = "windows")]
pub fn reveal_in_folder(path: &Path) -> io::Result<()> {
    use std::os::windows::process::CommandExt;

    std::process::Command::new("explorer")
        .raw_arg(format!("/select,\"{}\"", path.display()))
        .spawn()
        .map(|_| ())
}

#[cfg(target_os = "macos")]
pub fn reveal_in_folder(path: &Path) -> io::Result<()> {
    std::process::Command::new("open")
        .arg("-R")
        .arg(path)
        .spawn()
        .map(|_| ())
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn reveal_in_folder(path: &Path) -> io::Result<()> {
    let folder = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    open::that_detached(folder)
}
