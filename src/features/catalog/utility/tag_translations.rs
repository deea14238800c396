use once_cell::sync::Lazy;
use std::collections::HashMap;

static TAG_TRANSLATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // genre
        ("ADV", "アドベンチャー"),
        ("AVG", "アドベンチャー"),
        ("Horror", "ホラー"),
        ("Romance", "ロマンス"),
        ("Comedy", "コメディ"),
        ("Drama", "ドラマ"),
        ("Fantasy", "ファンタジー"),
        ("Sci-fi", "SF"),
        ("Mystery", "ミステリー"),
        ("Thriller", "スリラー"),
        ("Action", "アクション"),
        // protagonist
        ("Male Protagonist", "男性主人公"),
        ("Female Protagonist", "女性主人公"),
        // setting
        ("School Life", "学校生活"),
        ("High School", "高校"),
        ("School", "学校"),
        ("College", "大学"),
        ("Modern Day", "現代"),
        ("Future", "未来"),
        ("Past", "過去"),
        ("Japan", "日本"),
        ("Slice of Life", "日常系"),
        // mechanics
        ("Multiple Endings", "マルチエンディング"),
        ("Choices", "選択肢"),
        ("Branching Plot", "分岐シナリオ"),
        ("Linear Plot", "一本道"),
        ("Point and Click", "ポイント&クリック"),
        // content
        ("Sexual Content", "性的コンテンツ"),
        ("Eroge", "エロゲ"),
        ("No Sexual Content", "性的コンテンツなし"),
        ("Violence", "暴力表現"),
        ("Gore", "グロ表現"),
        ("Nakige", "泣きゲー"),
        ("Utsuge", "鬱ゲー"),
        ("Kinetic Novel", "キネティックノベル"),
        ("Visual Novel", "ビジュアルノベル"),
        ("RPG", "RPG"),
        ("Simulation", "シミュレーション"),
        ("Strategy", "ストラテジー"),
        ("Puzzle", "パズル"),
        // theme
        ("Time Travel", "タイムトラベル"),
        ("Supernatural", "超常現象"),
        ("Magic", "魔法"),
        ("War", "戦争"),
        ("Post-apocalyptic", "ポストアポカリプス"),
        ("Cyberpunk", "サイバーパンク"),
        ("Steampunk", "スチームパンク"),
        // character traits
        ("Tsundere", "ツンデレ"),
        ("Yandere", "ヤンデレ"),
        ("Kuudere", "クーデレ"),
        ("Childhood Friend", "幼馴染"),
        ("Maid", "メイド"),
        ("Teacher", "教師"),
        ("Student", "学生"),
    ])
});

/// Japanese name for a VNDB tag, if one is known.
pub fn translate_tag(name: &str) -> Option<&'static str> {
    TAG_TRANSLATIONS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_translate() {
        assert_eq!(translate_tag("Nakige"), Some("泣きゲー"));
        assert_eq!(translate_tag("Childhood Friend"), Some("幼馴染"));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(translate_tag("nakige"), None);
        assert_eq!(translate_tag("Unknown Tag"), None);
    }
}
