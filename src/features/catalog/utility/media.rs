const MEDIA_HOST: &str = "https://s2.vndb.org";
const TYPE_PREFIX_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCategory {
    Cover,
    Screenshot,
    Character,
}

impl MediaCategory {
    pub fn path_segment(self) -> &'static str {
        match self {
            MediaCategory::Cover => "cv",
            MediaCategory::Screenshot => "sf",
            MediaCategory::Character => "ch",
        }
    }
}

/// Builds the CDN URL for an image id such as `cv12345`.
///
/// Images are sharded into 100 buckets by the numeric part of the id.
/// Callers pass well-formed ids (two-letter type prefix, decimal suffix);
/// anything else produces a URL that points nowhere rather than an error.
pub fn resolve_media_url(media_id: &str, category: MediaCategory) -> String {
    let number = media_id.get(TYPE_PREFIX_LEN..).unwrap_or_default();
    format!(
        "{MEDIA_HOST}/{}/{:02}/{number}.jpg",
        category.path_segment(),
        bucket(number)
    )
}

// number mod 100, folded digit by digit so long ids cannot overflow
fn bucket(number: &str) -> u8 {
    number
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u8, |acc, digit| ((acc as u16 * 10 + (digit - b'0') as u16) % 100) as u8)
}
