use serde::Serialize;

/// Outbound platforms an `extlinks` row can point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Site {
    Dlsite,
    Dmm,
    Website,
    Steam,
    Pixiv,
    Booth,
    Twitter,
    Getchu,
    Gyutto,
    Digiket,
    Egs,
    Itch,
    ItchDev,
    Youtube,
    Wikidata,
}

/// One outbound link as handed to the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub site: String,
    pub value: String,
    pub url: Option<String>,
}

impl ExternalLink {
    pub fn new(site: impl Into<String>, value: impl Into<String>) -> Self {
        let site = site.into();
        let value = value.into();
        let url = normalize(&site, &value);
        Self { site, value, url }
    }
}

const DIGIKET_ID_WIDTH: usize = 7;

impl Site {
    pub const ALL: [Site; 15] = [
        Site::Dlsite,
        Site::Dmm,
        Site::Website,
        Site::Steam,
        Site::Pixiv,
        Site::Booth,
        Site::Twitter,
        Site::Getchu,
        Site::Gyutto,
        Site::Digiket,
        Site::Egs,
        Site::Itch,
        Site::ItchDev,
        Site::Youtube,
        Site::Wikidata,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Site::Dlsite => "dlsite",
            Site::Dmm => "dmm",
            Site::Website => "website",
            Site::Steam => "steam",
            Site::Pixiv => "pixiv",
            Site::Booth => "booth",
            Site::Twitter => "twitter",
            Site::Getchu => "getchu",
            Site::Gyutto => "gyutto",
            Site::Digiket => "digiket",
            Site::Egs => "egs",
            Site::Itch => "itch",
            Site::ItchDev => "itch_dev",
            Site::Youtube => "youtube",
            Site::Wikidata => "wikidata",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|site| site.tag() == tag)
    }

    /// Site-specific rule only; full URLs are handled by [`normalize`].
    pub fn build_url(self, value: &str) -> Option<String> {
        match self {
            Site::Dlsite => dlsite(value),
            Site::Dmm => Some(protocol_relative(value)),
            Site::Website => Some(value.to_string()),
            Site::Steam => {
                numeric(value).map(|id| format!("https://store.steampowered.com/app/{id}/"))
            }
            Site::Pixiv => numeric(value).map(|id| format!("https://www.pixiv.net/users/{id}")),
            Site::Booth => numeric(value).map(|id| format!("https://booth.pm/ja/items/{id}")),
            Site::Getchu => {
                numeric(value).map(|id| format!("https://www.getchu.com/soft.phtml?id={id}"))
            }
            Site::Gyutto => {
                numeric(value).map(|id| format!("http://gyutto.com/i/item{id}?select_uaflag=1"))
            }
            Site::Egs => numeric(value).map(|id| {
                format!("https://erogamescape.dyndns.org/~ap2/ero/toukei_kaiseki/game.php?game={id}")
            }),
            Site::Wikidata => numeric(value).map(|id| format!("https://www.wikidata.org/wiki/Q{id}")),
            Site::Digiket => numeric(value).map(|id| {
                format!(
                    "https://www.digiket.com/work/show/_data/ID=ITM{id:0>width$}/",
                    width = DIGIKET_ID_WIDTH
                )
            }),
            Site::Twitter => handle(value).map(|h| format!("https://x.com/{h}")),
            Site::Youtube => handle(value).map(|h| format!("https://www.youtube.com/@{h}")),
            Site::Itch => composite_path(value).map(|(user, game)| format!("https://{user}.itch.io/{game}")),
            Site::ItchDev => (!value.is_empty()).then(|| format!("https://{value}.itch.io/")),
        }
    }
}

/// Maps a stored `(site, value)` pair to an outbound URL.
///
/// Values that are already `http(s)` URLs pass through untouched for every
/// site. Unknown sites and values that do not fit the site's shape yield `None`.
pub fn normalize(site: &str, value: &str) -> Option<String> {
    if is_http_url(value) {
        return Some(value.to_string());
    }

    Site::from_tag(site)?.build_url(value)
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn numeric(value: &str) -> Option<&str> {
    (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())).then_some(value)
}

fn dlsite(value: &str) -> Option<String> {
    if value.starts_with("RJ") {
        Some(format!("https://www.dlsite.com/maniax/work/=/product_id/{value}.html"))
    } else if value.starts_with("VJ") {
        Some(format!("https://www.dlsite.com/pro/work/=/product_id/{value}.html"))
    } else {
        None
    }
}

fn protocol_relative(value: &str) -> String {
    if value.starts_with("//") {
        format!("https:{value}")
    } else {
        format!("https://{value}")
    }
}

fn handle(value: &str) -> Option<&str> {
    let handle = value.strip_prefix('@').unwrap_or(value);
    (!handle.is_empty()).then_some(handle)
}

// "user/game": exactly one separator, both halves non-empty
fn composite_path(value: &str) -> Option<(&str, &str)> {
    let (user, game) = value.split_once('/')?;
    if user.is_empty() || game.is_empty() || game.contains('/') {
        return None;
    }
    Some((user, game))
}
