//! Fixed lookup tables from record attributes to style tokens.

use crate::model::Category;

/// Badge classes for a content category.
pub fn category_style(category: Category) -> &'static str {
    match category {
        Category::Beauty => "bg-pink-100 text-pink-800",
        Category::Parenting => "bg-orange-100 text-orange-800",
        Category::Business => "bg-blue-100 text-blue-800",
        Category::Healthcare => "bg-green-100 text-green-800",
        Category::Personal => "bg-purple-100 text-purple-800",
        Category::Fashion => "bg-indigo-100 text-indigo-800",
        Category::Other => "bg-gray-100 text-gray-800",
    }
}

/// Badge classes for a 1-based rank.
pub fn rank_style(rank: usize) -> &'static str {
    match rank {
        1 => "bg-yellow-500 text-white",
        2 => "bg-gray-400 text-white",
        3 => "bg-amber-600 text-white",
        4..=5 => "bg-blue-500 text-white",
        6..=10 => "bg-green-500 text-white",
        _ => "bg-purple-500 text-white",
    }
}

/// What the rank badge shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Medal(&'static str),
    Number(usize),
}

impl RankBadge {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankBadge::Medal("🥇"),
            2 => RankBadge::Medal("🥈"),
            3 => RankBadge::Medal("🥉"),
            n => RankBadge::Number(n),
        }
    }
}

impl std::fmt::Display for RankBadge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankBadge::Medal(icon) => f.write_str(icon),
            RankBadge::Number(n) => write!(f, "#{n}"),
        }
    }
}

/// Handle text shrinks as the handle gets longer so it fits one line.
pub fn handle_font_class(handle: &str) -> &'static str {
    match handle.chars().count() {
        0..=10 => "text-lg",
        11..=15 => "text-base",
        16..=20 => "text-sm",
        _ => "text-xs",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_bands() {
        assert_eq!(rank_style(1), "bg-yellow-500 text-white");
        assert_eq!(rank_style(5), "bg-blue-500 text-white");
        assert_eq!(rank_style(6), "bg-green-500 text-white");
        assert_eq!(rank_style(15), "bg-purple-500 text-white");
    }

    #[test]
    fn test_unmapped_category_uses_catch_all() {
        assert_eq!(
            category_style(Category::from_label("여행")),
            category_style(Category::Other)
        );
        assert_eq!(category_style(Category::from_label("패션")), "bg-indigo-100 text-indigo-800");
    }

    #[test]
    fn test_rank_badge() {
        assert_eq!(RankBadge::for_rank(2).to_string(), "🥈");
        assert_eq!(RankBadge::for_rank(4).to_string(), "#4");
    }

    #[test]
    fn test_handle_font_shrinks() {
        assert_eq!(handle_font_class("@short"), "text-lg");
        assert_eq!(handle_font_class("@medium_handle"), "text-base");
        assert_eq!(handle_font_class("@a_rather_long_handle_name"), "text-xs");
    }
}
