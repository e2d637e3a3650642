use std::fs;
use std::io::IsTerminal;
use std::path::Path;

/// Create an OSC8 file:// hyperlink for terminal output
pub fn osc8_file_link(path: &Path, text: &str) -> String {
    let abs_path = fs::canonicalize(path)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string());
    format!("\x1b]8;;file://{}\x1b\\{}\x1b]8;;\x1b\\", abs_path, text)
}

/// Folder path for display: a clickable link on a terminal, plain text otherwise
pub fn display_folder(path: &Path) -> String {
    let text = path.display().to_string();
    if std::io::stdout().is_terminal() {
        osc8_file_link(path, &text)
    } else {
        text
    }
}
