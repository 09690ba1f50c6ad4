//! Audio payloads returned by the API and their container detection.
//!
//! ```rust
//! use cambclient::{AudioClip, AudioFormat};
//!
//! let clip = AudioClip::detect(b"RIFF....WAVEfmt ".to_vec(), None);
//! assert_eq!(clip.format, AudioFormat::Wav);
//! assert_eq!(clip.format.extension(), "wav");
//! ```

const PCM_SAMPLE_RATE: u32 = 24_000;
const PCM_CHANNELS: u16 = 1;
const PCM_BITS_PER_SAMPLE: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,
    Pcm,
}

impl AudioFormat {
    /// Magic bytes take precedence over the content type; anything
    /// unrecognised is assumed to be raw PCM.
    pub fn detect(bytes: &[u8], content_type: Option<&str>) -> Self {
        if bytes.starts_with(b"RIFF") {
            return Self::Wav;
        }
        if bytes.starts_with(&[0xff, 0xfb]) || bytes.starts_with(&[0xff, 0xfa]) || bytes.starts_with(b"ID3") {
            return Self::Mp3;
        }
        if bytes.starts_with(b"fLaC") {
            return Self::Flac;
        }
        if bytes.starts_with(b"OggS") {
            return Self::Ogg;
        }

        let content_type = content_type.unwrap_or_default().to_ascii_lowercase();
        if content_type.contains("wav") || content_type.contains("wave") {
            Self::Wav
        } else if content_type.contains("mpeg") || content_type.contains("mp3") {
            Self::Mp3
        } else if content_type.contains("flac") {
            Self::Flac
        } else if content_type.contains("ogg") {
            Self::Ogg
        } else {
            Self::Pcm
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Wav | Self::Pcm => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
            Self::Ogg => "ogg",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub format: AudioFormat,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, format: AudioFormat) -> Self {
        Self { bytes, format }
    }

    pub fn detect(bytes: Vec<u8>, content_type: Option<&str>) -> Self {
        let format = AudioFormat::detect(&bytes, content_type);
        Self { bytes, format }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Wraps non-empty raw PCM in a RIFF/WAVE header (24 kHz, 16-bit, mono).
    /// Other formats are returned unchanged.
    pub fn into_playable(self) -> Self {
        if self.format != AudioFormat::Pcm || self.bytes.is_empty() {
            return self;
        }

        let mut bytes = wav_header(self.bytes.len() as u32);
        bytes.extend_from_slice(&self.bytes);
        Self::new(bytes, AudioFormat::Wav)
    }
}

fn wav_header(data_size: u32) -> Vec<u8> {
    let block_align = PCM_CHANNELS * PCM_BITS_PER_SAMPLE / 8;
    let byte_rate = PCM_SAMPLE_RATE * u32::from(block_align);

    let mut header = Vec::with_capacity(44);
    header.extend_from_slice(b"RIFF");
    header.extend_from_slice(&(36 + data_size).to_le_bytes());
    header.extend_from_slice(b"WAVE");
    header.extend_from_slice(b"fmt ");
    header.extend_from_slice(&16_u32.to_le_bytes());
    header.extend_from_slice(&1_u16.to_le_bytes());
    header.extend_from_slice(&PCM_CHANNELS.to_le_bytes());
    header.extend_from_slice(&PCM_SAMPLE_RATE.to_le_bytes());
    header.extend_from_slice(&byte_rate.to_le_bytes());
    header.extend_from_slice(&block_align.to_le_bytes());
    header.extend_from_slice(&PCM_BITS_PER_SAMPLE.to_le_bytes());
    header.extend_from_slice(b"data");
    header.extend_from_slice(&data_size.to_le_bytes());
    header
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_from_magic_then_content_type() {
        assert_eq!(AudioFormat::detect(b"ID3\x04", None), AudioFormat::Mp3);
        assert_eq!(AudioFormat::detect(b"fLaC", None), AudioFormat::Flac);
        assert_eq!(AudioFormat::detect(b"OggS", Some("audio/wav")), AudioFormat::Ogg);
        assert_eq!(AudioFormat::detect(b"\x00\x01", Some("audio/mpeg")), AudioFormat::Mp3);
        assert_eq!(AudioFormat::detect(b"\x00\x01", Some("audio/x-wav")), AudioFormat::Wav);
        assert_eq!(AudioFormat::detect(b"\x00\x01", None), AudioFormat::Pcm);
    }

    #[test]
    fn pcm_gets_a_wav_header() {
        let clip = AudioClip::new(vec![1, 2, 3, 4], AudioFormat::Pcm).into_playable();

        assert_eq!(clip.format, AudioFormat::Wav);
        assert_eq!(clip.bytes.len(), 48);
        assert_eq!(&clip.bytes[0..4], b"RIFF");
        assert_eq!(&clip.bytes[4..8], &40_u32.to_le_bytes());
        assert_eq!(&clip.bytes[8..12], b"WAVE");
        assert_eq!(&clip.bytes[24..28], &24_000_u32.to_le_bytes());
        assert_eq!(&clip.bytes[28..32], &48_000_u32.to_le_bytes());
        assert_eq!(&clip.bytes[40..44], &4_u32.to_le_bytes());
        assert_eq!(&clip.bytes[44..], &[1, 2, 3, 4]);
    }

    #[test]
    fn non_pcm_and_empty_clips_are_untouched() {
        let mp3 = AudioClip::new(b"ID3abc".to_vec(), AudioFormat::Mp3);
        assert_eq!(mp3.clone().into_playable(), mp3);

        let empty = AudioClip::new(Vec::new(), AudioFormat::Pcm);
        assert_eq!(empty.clone().into_playable(), empty);
    }
}
