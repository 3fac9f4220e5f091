//! Output segments

/// One `(furigana, text)` unit of a furigana result
///
/// An empty `furigana` means the text is rendered plain. With the `serde`
/// feature a segment serializes as the two-element array `[furigana, text]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(String, String)", into = "(String, String)")
)]
pub struct Segment {
    /// Reading shown above the text, empty for plain text
    pub furigana: String,
    /// Base text
    pub text: String,
}

impl Segment {
    /// Create a segment
    pub fn new(furigana: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            furigana: furigana.into(),
            text: text.into(),
        }
    }

    /// Create an unannotated segment
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(String::new(), text)
    }

    /// Whether the segment carries a reading
    pub fn is_annotated(&self) -> bool {
        !self.furigana.is_empty()
    }

    /// Convert into the `(furigana, text)` pair handed to renderers
    pub fn into_pair(self) -> (String, String) {
        (self.furigana, self.text)
    }
}

impl From<(String, String)> for Segment {
    fn from((furigana, text): (String, String)) -> Self {
        Self { furigana, text }
    }
}

impl From<Segment> for (String, String) {
    fn from(segment: Segment) -> Self {
        segment.into_pair()
    }
}

/// Concatenate the base text of every segment
pub fn base_text(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

/// Concatenate the reading of a result, using base text for plain segments
pub fn reading_of(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_annotated() {
                s.furigana.as_str()
            } else {
                s.text.as_str()
            }
        })
        .collect()
}
