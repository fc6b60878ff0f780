//! Async helpers for dialogs, file IO and delayed work

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::features::Participant;
use crate::features::participants::load_participants;
use crate::features::qr_pass::{pass_file_name, render_pass_png};

/// Delay between registration success and the pass appearing
pub const QR_REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// Resolve after `delay`
pub async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Ask for a roster CSV and parse it
///
/// `None` when the dialog was cancelled.
pub async fn pick_participants() -> Option<Result<(String, Vec<Participant>), String>> {
    let handle = rfd::AsyncFileDialog::new()
        .set_title("Upload participants CSV")
        .add_filter("CSV", &["csv"])
        .pick_file()
        .await?;

    let file_name = handle.file_name();
    let path = handle.path().to_path_buf();
    tracing::info!("Loading participants from {}", path.display());

    let result = async {
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", file_name))?;
        let participants = load_participants(&bytes)?;
        anyhow::Ok(participants)
    }
    .await
    .map(|participants| (file_name, participants))
    .map_err(|e| e.to_string());

    Some(result)
}

/// Render the pass card after the reveal delay
pub async fn render_pass_delayed(reg_num: String) -> Result<Vec<u8>, String> {
    sleep(QR_REVEAL_DELAY).await;
    tokio::task::spawn_blocking(move || render_pass_png(&reg_num))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| format!("{:#}", e))
}

/// Ask where to save the pass PNG and write it
///
/// `Ok(None)` when the dialog was cancelled.
pub async fn save_pass(reg_num: String, png: Vec<u8>) -> Result<Option<PathBuf>, String> {
    let Some(handle) = rfd::AsyncFileDialog::new()
        .set_title("Download QR Pass")
        .set_file_name(pass_file_name(&reg_num))
        .add_filter("PNG image", &["png"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = handle.path().to_path_buf();
    tokio::fs::write(&path, &png)
        .await
        .with_context(|| format!("Failed to save {}", path.display()))
        .map_err(|e| format!("{:#}", e))?;
    tracing::info!("Saved QR pass to {}", path.display());
    Ok(Some(path))
}
