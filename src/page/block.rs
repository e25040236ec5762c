//! Displayable content blocks.
//!
//! A descriptor block is a mapping where exactly one key is meant to be set
//! (`text`, `code`, `list`, ...). Decoding keeps the first populated field in
//! declaration order and ignores the others; a block with nothing populated
//! is dropped.

use serde::{Deserialize, Deserializer, Serialize};

/// One block of page content, displayed before members.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentBlock {
    Text(String),
    /// Lua code
    Code(String),
    List(Vec<String>),
    Title(String),
    Subtitle(String),
    /// Relative link to an image (png / jpeg)
    Image(String),
    /// Relative link to a movie, a link to a video...
    Media(String),
    Audio(AudioTrack),
    AudioList(Vec<AudioTrack>),
}

/// An audio player entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTrack {
    /// Display name for the player
    pub title: String,
    /// Relative link to a sound file (.mp3)
    pub file: String,
}

/// Descriptor shape of a block, before picking its variant.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawContentBlock {
    text: String,
    code: String,
    list: Vec<String>,
    title: String,
    subtitle: String,
    image: String,
    media: String,
    audio: Option<AudioTrack>,
    audiolist: Vec<AudioTrack>,
}

impl RawContentBlock {
    fn into_block(self) -> Option<ContentBlock> {
        let block = if !self.text.is_empty() {
            ContentBlock::Text(self.text)
        } else if !self.code.is_empty() {
            ContentBlock::Code(self.code)
        } else if !self.list.is_empty() {
            ContentBlock::List(self.list)
        } else if !self.title.is_empty() {
            ContentBlock::Title(self.title)
        } else if !self.subtitle.is_empty() {
            ContentBlock::Subtitle(self.subtitle)
        } else if !self.image.is_empty() {
            ContentBlock::Image(self.image)
        } else if !self.media.is_empty() {
            ContentBlock::Media(self.media)
        } else if let Some(audio) = self.audio {
            ContentBlock::Audio(audio)
        } else if !self.audiolist.is_empty() {
            ContentBlock::AudioList(self.audiolist)
        } else {
            return None;
        };
        Some(block)
    }
}

impl ContentBlock {
    /// Mutable access to the free-form text, for sanitizing.
    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// `deserialize_with` helper for `Page::blocks`.
pub(super) fn deserialize_blocks<'de, D>(deserializer: D) -> Result<Vec<ContentBlock>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<RawContentBlock>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(RawContentBlock::into_block)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Blocks {
        #[serde(deserialize_with = "deserialize_blocks")]
        blocks: Vec<ContentBlock>,
    }

    fn decode(yaml: &str) -> Vec<ContentBlock> {
        serde_yaml::from_str::<Blocks>(yaml).unwrap().blocks
    }

    #[test]
    fn test_each_variant_decodes() {
        let blocks = decode(
            r#"
blocks:
  - text: Hello
  - code: print("hi")
  - list: [a, b]
  - title: Intro
  - subtitle: Details
  - image: /images/a.png
  - media: /media/a.mp4
  - audio:
      title: Boing
      file: /audio/boing.mp3
  - audiolist:
      - title: One
        file: /audio/1.mp3
"#,
        );
        assert_eq!(blocks.len(), 9);
        assert_eq!(blocks[0], ContentBlock::Text("Hello".into()));
        assert_eq!(blocks[1], ContentBlock::Code("print(\"hi\")".into()));
        assert_eq!(blocks[2], ContentBlock::List(vec!["a".into(), "b".into()]));
        assert_eq!(
            blocks[7],
            ContentBlock::Audio(AudioTrack {
                title: "Boing".into(),
                file: "/audio/boing.mp3".into()
            })
        );
        assert!(matches!(&blocks[8], ContentBlock::AudioList(list) if list.len() == 1));
    }

    #[test]
    fn test_first_populated_field_wins() {
        let blocks = decode(
            r#"
blocks:
  - code: x = 1
    text: prose
    image: ignored.png
"#,
        );
        assert_eq!(blocks, vec![ContentBlock::Text("prose".into())]);
    }

    #[test]
    fn test_empty_block_is_dropped() {
        let blocks = decode(
            r#"
blocks:
  - {}
  - unknown: field
  - text: kept
"#,
        );
        assert_eq!(blocks, vec![ContentBlock::Text("kept".into())]);
    }

    #[test]
    fn test_null_blocks_decode_empty() {
        assert!(decode("blocks: ~").is_empty());
    }

    #[test]
    fn test_serializes_as_single_key_mapping() {
        let json = serde_json::to_string(&ContentBlock::Title("Intro".into())).unwrap();
        assert_eq!(json, r#"{"title":"Intro"}"#);
        let json = serde_json::to_string(&ContentBlock::AudioList(vec![])).unwrap();
        assert_eq!(json, r#"{"audiolist":[]}"#);
    }
}
