//! Shaping of audio payloads into tool outputs.

use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cambclient::AudioClip;
use tempfile::TempPath;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{OutputFormat, ToolError, ToolOutput};

const TEMP_FILE_PREFIX: &str = "camb_";

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Returns the clip in the requested shape. `file_path` writes a kept temp
/// file named after the clip's detected format.
pub async fn shape_audio(clip: AudioClip, format: OutputFormat) -> Result<ToolOutput, ToolError> {
    match format {
        OutputFormat::Bytes => Ok(ToolOutput::Bytes(clip.bytes)),
        OutputFormat::Base64 => Ok(ToolOutput::Base64(encode_base64(&clip.bytes))),
        OutputFormat::FilePath => write_kept_file(&clip).await.map(ToolOutput::FilePath),
    }
}

async fn write_kept_file(clip: &AudioClip) -> Result<PathBuf, ToolError> {
    let suffix = format!(".{}", clip.format.extension());
    let file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(&suffix)
        .tempfile()
        .map_err(|err| ToolError::io(format!("failed to create output file: {err}")))?;

    let (std_file, temp_path) = file.into_parts();
    write_then_keep(tokio::fs::File::from_std(std_file), temp_path, &clip.bytes).await
}

/// The file behind `temp_path` is deleted unless every byte was written.
async fn write_then_keep<W>(
    mut output: W,
    temp_path: TempPath,
    bytes: &[u8],
) -> Result<PathBuf, ToolError>
where
    W: AsyncWrite + Unpin,
{
    let written = async {
        output.write_all(bytes).await?;
        output.flush().await
    }
    .await;
    if let Err(err) = written {
        return Err(ToolError::io(format!(
            "failed to write '{}': {err}",
            temp_path.display()
        )));
    }

    temp_path
        .keep()
        .map_err(|err| ToolError::io(format!("failed to keep output file: {}", err.error)))
}
