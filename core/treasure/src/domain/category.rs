//! カテゴリフィルタ（名前の部分一致による排他的セレクタ）

/// カテゴリフィルタ。単一選択で、名前の部分一致により visible 集合を絞る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// すべて表示
    #[default]
    All,
    /// "McDonald's" を含むもの
    Food,
    /// "Starbucks" または "Tim Hortons" を含むもの
    Cafe,
    /// Food にも Cafe にも該当しないもの
    Other,
}

impl CategoryFilter {
    /// 文字列からフィルタを解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "food" => Some(Self::Food),
            "cafe" => Some(Self::Cafe),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Food => "food",
            Self::Cafe => "cafe",
            Self::Other => "other",
        }
    }

    /// この名前がフィルタを通るか
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Food => name.contains("McDonald's"),
            Self::Cafe => name.contains("Starbucks") || name.contains("Tim Hortons"),
            Self::Other => !Self::Food.matches(name) && !Self::Cafe.matches(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        assert!(CategoryFilter::All.matches("McDonald's"));
        assert!(CategoryFilter::All.matches("Harbourfront Cafe"));
        assert!(CategoryFilter::All.matches(""));
    }

    #[test]
    fn test_food_matches_mcdonalds_only() {
        assert!(CategoryFilter::Food.matches("McDonald's"));
        assert!(CategoryFilter::Food.matches("McDonald's Yonge St"));
        assert!(!CategoryFilter::Food.matches("Starbucks"));
        assert!(!CategoryFilter::Food.matches("mcdonald's"));
    }

    #[test]
    fn test_cafe_matches_starbucks_and_tim_hortons() {
        assert!(CategoryFilter::Cafe.matches("Starbucks"));
        assert!(CategoryFilter::Cafe.matches("Tim Hortons"));
        assert!(!CategoryFilter::Cafe.matches("McDonald's"));
    }

    #[test]
    fn test_other_is_complement_of_food_and_cafe() {
        assert!(!CategoryFilter::Other.matches("McDonald's"));
        assert!(!CategoryFilter::Other.matches("Starbucks"));
        assert!(!CategoryFilter::Other.matches("Tim Hortons"));
        assert!(CategoryFilter::Other.matches("Harbourfront Cafe"));
        assert!(CategoryFilter::Other.matches("CN Tower"));
    }

    #[test]
    fn test_parse_round_trip() {
        for f in [
            CategoryFilter::All,
            CategoryFilter::Food,
            CategoryFilter::Cafe,
            CategoryFilter::Other,
        ] {
            assert_eq!(CategoryFilter::parse(f.as_str()), Some(f));
        }
        assert_eq!(CategoryFilter::parse("Food"), Some(CategoryFilter::Food));
        assert_eq!(CategoryFilter::parse("drinks"), None);
    }
}
