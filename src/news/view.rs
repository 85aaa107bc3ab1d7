//! Maps an ordered article list onto the page's three regions and resolves
//! every display field, falling back to placeholders where the API left
//! gaps.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::fallback::fallback_image;
use super::model::Article;

pub const SIDEBAR_SLOTS: usize = 4;
pub const LATEST_CAP: usize = 4;

const NO_LINK: &str = "#";
const DEFAULT_DESCRIPTION: &str = "Click to read more about this story.";

const TECH_SOURCES: [&str; 4] = ["tech", "wired", "the verge", "techcrunch"];
const BUSINESS_SOURCES: [&str; 4] = ["business", "bloomberg", "financial times", "economist"];
const SPORT_SOURCES: [&str; 3] = ["espn", "sports", "bbc sport"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedView {
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub image: String,
    pub title: String,
    pub url: String,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image: String,
    pub category: String,
    pub title: String,
    pub url: String,
    pub byline: String,
    pub time_ago: String,
}

/// Which articles land in which region.
#[derive(Debug, PartialEq, Eq)]
pub struct Placement<'a> {
    pub featured: Option<&'a Article>,
    pub sidebar: &'a [Article],
    pub latest: &'a [Article],
}

/// Front-page layout: first article featured, the next four in the
/// sidebar, and up to four more in the latest list.
pub fn partition(articles: &[Article]) -> Placement<'_> {
    let sidebar_end = articles.len().min(1 + SIDEBAR_SLOTS);
    let rest = articles.get(sidebar_end..).unwrap_or(&[]);
    Placement {
        featured: articles.first(),
        sidebar: articles.get(1..sidebar_end).unwrap_or(&[]),
        latest: &rest[..rest.len().min(LATEST_CAP)],
    }
}

/// Search layout: no sidebar, everything after the first result goes to
/// the latest list.
pub fn partition_search(articles: &[Article]) -> Placement<'_> {
    let rest = articles.get(1..).unwrap_or(&[]);
    Placement {
        featured: articles.first(),
        sidebar: &[],
        latest: &rest[..rest.len().min(LATEST_CAP)],
    }
}

pub fn featured_view(article: &Article) -> FeaturedView {
    FeaturedView {
        image: article
            .url_to_image
            .clone()
            .unwrap_or_else(|| fallback_image("technology", 0).to_string()),
        category: article.category.clone().unwrap_or_else(|| "TOP STORY".into()),
        title: article.title.clone().unwrap_or_else(|| "Breaking News".into()),
        description: article
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.into()),
        url: link_of(article),
    }
}

pub fn sidebar_view(article: &Article, index: usize, now: OffsetDateTime) -> SidebarView {
    let source = article.source_name().unwrap_or("News Source");
    let time = format_time_ago(article.published_at.as_deref(), now);
    SidebarView {
        image: article
            .url_to_image
            .clone()
            .unwrap_or_else(|| fallback_image("general", index).to_string()),
        title: article.title.clone().unwrap_or_else(|| "News Story".into()),
        url: link_of(article),
        meta: format!("{} • {}", source, time),
    }
}

pub fn card_view(article: &Article, index: usize, now: OffsetDateTime) -> CardView {
    let category = resolve_category(article);
    CardView {
        image: article
            .url_to_image
            .clone()
            .unwrap_or_else(|| fallback_image(&category.to_lowercase(), index).to_string()),
        title: article.title.clone().unwrap_or_else(|| "News Story".into()),
        url: link_of(article),
        byline: article
            .author
            .as_deref()
            .or(article.source_name())
            .unwrap_or("Unknown Author")
            .to_string(),
        time_ago: format_time_ago(article.published_at.as_deref(), now),
        category,
    }
}

fn link_of(article: &Article) -> String {
    article.url.clone().unwrap_or_else(|| NO_LINK.into())
}

/// Card label: the article's own category when it has one, otherwise a
/// guess from the outlet name. Always uppercase.
pub fn resolve_category(article: &Article) -> String {
    match article.category.as_deref() {
        Some(c) if !c.is_empty() => c.to_uppercase(),
        _ => category_from_source(article.source_name()).to_string(),
    }
}

pub fn category_from_source(source_name: Option<&str>) -> &'static str {
    let Some(name) = source_name else { return "NEWS" };
    let lower = name.to_lowercase();
    let matches = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));

    if matches(&TECH_SOURCES) {
        "TECHNOLOGY"
    } else if matches(&BUSINESS_SOURCES) {
        "BUSINESS"
    } else if matches(&SPORT_SOURCES) {
        "SPORTS"
    } else {
        "NEWS"
    }
}

/// Coarse "time ago" label. Whole units only and no singular forms, so 90
/// seconds reads "1 minutes ago". Missing, unparseable or future timestamps
/// read "Just now".
pub fn format_time_ago(published_at: Option<&str>, now: OffsetDateTime) -> String {
    let Some(published) = published_at.and_then(|s| OffsetDateTime::parse(s, &Rfc3339).ok()) else {
        return "Just now".into();
    };
    let secs = (now - published).whole_seconds();
    if secs < 60 {
        "Just now".into()
    } else if secs < 3600 {
        format!("{} minutes ago", secs / 60)
    } else if secs < 86400 {
        format!("{} hours ago", secs / 3600)
    } else {
        format!("{} days ago", secs / 86400)
    }
}

/// Everything currently shown on the page. Survives between loads so that
/// sidebar slots without a replacement keep their old story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub section_title: String,
    pub featured: Option<FeaturedView>,
    pub sidebar: [Option<SidebarView>; SIDEBAR_SLOTS],
    pub latest: Vec<CardView>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            section_title: "Latest News".into(),
            featured: None,
            sidebar: Default::default(),
            latest: Vec::new(),
        }
    }
}

impl Page {
    /// The loading overlay covers the featured and latest regions.
    pub fn clear_for_loading(&mut self) {
        self.featured = None;
        self.latest.clear();
    }

    pub fn apply_headlines(&mut self, articles: &[Article], now: OffsetDateTime) {
        self.section_title = "Latest News".into();
        self.apply(partition(articles), now);
    }

    pub fn apply_search(&mut self, term: &str, articles: &[Article], now: OffsetDateTime) {
        self.section_title = format!("Search Results: \"{}\"", term);
        self.sidebar = Default::default();
        self.apply(partition_search(articles), now);
    }

    fn apply(&mut self, placement: Placement<'_>, now: OffsetDateTime) {
        if let Some(first) = placement.featured {
            self.featured = Some(featured_view(first));
        }
        for (i, article) in placement.sidebar.iter().enumerate() {
            self.sidebar[i] = Some(sidebar_view(article, i, now));
        }
        if !placement.latest.is_empty() {
            self.latest = placement
                .latest
                .iter()
                .enumerate()
                .map(|(i, a)| card_view(a, i, now))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::model::Source;
    use pretty_assertions::assert_eq;
    use time::Duration;

    fn now() -> OffsetDateTime {
        OffsetDateTime::parse("2024-05-10T12:00:00Z", &Rfc3339).unwrap()
    }

    fn ago(d: Duration) -> Option<String> {
        (now() - d).format(&Rfc3339).ok()
    }

    fn titled(n: usize) -> Article {
        Article {
            title: Some(format!("story {}", n)),
            url: Some(format!("https://example.com/{}", n)),
            ..Article::default()
        }
    }

    fn from_source(name: &str) -> Article {
        Article {
            source: Some(Source {
                name: Some(name.into()),
            }),
            ..Article::default()
        }
    }

    #[test]
    fn time_ago_boundaries() {
        let n = now();
        assert_eq!(format_time_ago(ago(Duration::seconds(30)).as_deref(), n), "Just now");
        assert_eq!(format_time_ago(ago(Duration::seconds(90)).as_deref(), n), "1 minutes ago");
        assert_eq!(format_time_ago(ago(Duration::seconds(3599)).as_deref(), n), "59 minutes ago");
        assert_eq!(format_time_ago(ago(Duration::seconds(7200)).as_deref(), n), "2 hours ago");
        assert_eq!(format_time_ago(ago(Duration::seconds(86399)).as_deref(), n), "23 hours ago");
        assert_eq!(format_time_ago(ago(Duration::seconds(172800)).as_deref(), n), "2 days ago");
        assert_eq!(format_time_ago(ago(Duration::ZERO).as_deref(), n), "Just now");
        assert_eq!(format_time_ago(None, n), "Just now");
    }

    #[test]
    fn time_ago_tolerates_future_and_garbage() {
        let n = now();
        let future = (n + Duration::hours(3)).format(&Rfc3339).ok();
        assert_eq!(format_time_ago(future.as_deref(), n), "Just now");
        assert_eq!(format_time_ago(Some("yesterday-ish"), n), "Just now");
    }

    #[test]
    fn seven_articles_fill_all_regions() {
        let articles: Vec<Article> = (0..7).map(titled).collect();
        let p = partition(&articles);
        assert_eq!(p.featured, Some(&articles[0]));
        assert_eq!(p.sidebar, &articles[1..5]);
        assert_eq!(p.latest, &articles[5..7]);
    }

    #[test]
    fn latest_list_is_capped() {
        let articles: Vec<Article> = (0..12).map(titled).collect();
        let p = partition(&articles);
        assert_eq!(p.latest, &articles[5..9]);
    }

    #[test]
    fn short_lists_leave_regions_empty() {
        let none: Vec<Article> = Vec::new();
        let p = partition(&none);
        assert!(p.featured.is_none());
        assert!(p.sidebar.is_empty() && p.latest.is_empty());

        let three: Vec<Article> = (0..3).map(titled).collect();
        let p = partition(&three);
        assert_eq!(p.sidebar.len(), 2);
        assert!(p.latest.is_empty());
    }

    #[test]
    fn search_layout_skips_sidebar() {
        let articles: Vec<Article> = (0..4).map(titled).collect();
        let p = partition_search(&articles);
        assert_eq!(p.featured, Some(&articles[0]));
        assert!(p.sidebar.is_empty());
        assert_eq!(p.latest, &articles[1..4]);
    }

    #[test]
    fn category_guessed_from_outlet() {
        assert_eq!(category_from_source(Some("TechCrunch Daily")), "TECHNOLOGY");
        assert_eq!(category_from_source(Some("ESPN Now")), "SPORTS");
        assert_eq!(category_from_source(Some("Random Gazette")), "NEWS");
        assert_eq!(category_from_source(Some("Bloomberg")), "BUSINESS");
        // Technology wins over business.
        assert_eq!(category_from_source(Some("Tech Business Weekly")), "TECHNOLOGY");
        assert_eq!(category_from_source(None), "NEWS");
    }

    #[test]
    fn explicit_category_beats_source_guess() {
        let mut a = from_source("ESPN");
        a.category = Some("Health".into());
        assert_eq!(resolve_category(&a), "HEALTH");
        a.category = None;
        assert_eq!(resolve_category(&a), "SPORTS");
    }

    #[test]
    fn bare_article_gets_placeholders() {
        let bare = Article::default();
        let n = now();

        let f = featured_view(&bare);
        assert_eq!(f.title, "Breaking News");
        assert_eq!(f.category, "TOP STORY");
        assert_eq!(f.description, DEFAULT_DESCRIPTION);
        assert_eq!(f.image, fallback_image("technology", 0));
        assert_eq!(f.url, "#");

        let s = sidebar_view(&bare, 3, n);
        assert_eq!(s.title, "News Story");
        assert_eq!(s.meta, "News Source • Just now");
        assert_eq!(s.image, fallback_image("general", 3));

        let c = card_view(&bare, 1, n);
        assert_eq!(c.title, "News Story");
        assert_eq!(c.category, "NEWS");
        assert_eq!(c.byline, "Unknown Author");
        assert_eq!(c.image, fallback_image("news", 1));
        assert_eq!(c.url, "#");
    }

    #[test]
    fn byline_prefers_author_then_source() {
        let n = now();
        let mut a = from_source("Wired");
        assert_eq!(card_view(&a, 0, n).byline, "Wired");
        a.author = Some("Ada".into());
        assert_eq!(card_view(&a, 0, n).byline, "Ada");
        assert_eq!(card_view(&a, 0, n).image, fallback_image("technology", 0));
    }

    #[test]
    fn sidebar_slots_without_replacement_are_kept() {
        let n = now();
        let mut page = Page::default();
        let seven: Vec<Article> = (0..7).map(titled).collect();
        page.apply_headlines(&seven, n);
        assert!(page.sidebar.iter().all(Option::is_some));
        assert_eq!(page.latest.len(), 2);

        let three: Vec<Article> = (10..13).map(titled).collect();
        page.clear_for_loading();
        page.apply_headlines(&three, n);

        let titles: Vec<_> = page
            .sidebar
            .iter()
            .map(|s| s.as_ref().map(|s| s.title.clone()).unwrap_or_default())
            .collect();
        assert_eq!(titles, vec!["story 11", "story 12", "story 3", "story 4"]);
        assert_eq!(page.featured.as_ref().unwrap().title, "story 10");
        assert!(page.latest.is_empty());
    }

    #[test]
    fn search_results_replace_sidebar_and_title() {
        let n = now();
        let mut page = Page::default();
        page.apply_headlines(&(0..7).map(titled).collect::<Vec<_>>(), n);
        page.apply_search("mars", &(20..23).map(titled).collect::<Vec<_>>(), n);

        assert_eq!(page.section_title, "Search Results: \"mars\"");
        assert!(page.sidebar.iter().all(Option::is_none));
        assert_eq!(page.featured.as_ref().unwrap().title, "story 20");
        assert_eq!(
            page.latest.iter().map(|c| c.title.as_str()).collect::<Vec<_>>(),
            vec!["story 21", "story 22"]
        );
    }
}
