//! Fixed registry of RSS feed endpoints.
//!
//! The feed list is compiled in rather than configured: sources change
//! rarely and a bad edit to an external file should not be able to take the
//! aggregator down.

/// A named feed endpoint.
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Display name of the source, also used to derive article ids.
    pub name: String,
    /// RSS/Atom feed URL.
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// All feeds polled by the pipeline, grouped by region/topic.
pub fn all_feeds() -> Vec<FeedSource> {
    vec![
        // Pan-African news
        FeedSource::new(
            "AllAfrica",
            "https://allafrica.com/tools/headlines/rdf/latest/headlines.rdf",
        ),
        // International coverage of Africa
        FeedSource::new(
            "The Guardian Africa",
            "https://www.theguardian.com/world/africa/rss",
        ),
        FeedSource::new("France 24 Africa", "https://www.france24.com/en/africa/rss"),
        FeedSource::new(
            "Deutsche Welle Africa",
            "https://www.dw.com/en/africa/s-12297/rss",
        ),
        FeedSource::new(
            "Voice of America Africa",
            "https://www.voanews.com/api/zq-jveqmpi",
        ),
        FeedSource::new("BBC Africa", "https://www.bbc.com/news/world/africa/rss.xml"),
        FeedSource::new("Africanews", "https://www.africanews.com/feed/"),
        FeedSource::new("Reuters Africa", "https://www.reuters.com/world/africa/"),
        // South Africa
        FeedSource::new(
            "SABC News South Africa",
            "https://www.sabcnews.com/sabcnews/feed/",
        ),
        FeedSource::new("IOL South Africa", "https://www.iol.co.za/rss/news"),
        FeedSource::new(
            "News24 South Africa",
            "https://www.news24.com/news24/southafrica/rss",
        ),
        FeedSource::new("Times Live South Africa", "https://www.timeslive.co.za/rss/"),
        FeedSource::new("EWN South Africa", "https://ewn.co.za/RSS%20Feeds/RSS"),
        // East Africa
        FeedSource::new(
            "Daily Monitor Uganda",
            "https://www.monitor.co.ug/rss/news.rss",
        ),
        FeedSource::new(
            "The Standard Kenya",
            "https://www.standardmedia.co.ke/rss/headlines.php",
        ),
        FeedSource::new(
            "Daily Nation Kenya",
            "https://www.nation.co.ke/kenya/news/rss",
        ),
        FeedSource::new(
            "The East African",
            "https://www.theeastafrican.co.ke/tea/rss",
        ),
        FeedSource::new("The New Times Rwanda", "https://www.newtimes.co.rw/rss"),
        FeedSource::new(
            "The Citizen Tanzania",
            "https://www.thecitizen.co.tz/tanzania/rss",
        ),
        // West Africa
        FeedSource::new(
            "GhanaWeb",
            "https://www.ghanaweb.com/GhanaHomePage/rss/news.xml",
        ),
        FeedSource::new("Daily Graphic Ghana", "https://www.graphic.com.gh/news.feed"),
        FeedSource::new("Punch Nigeria", "https://punchng.com/feed/"),
        FeedSource::new(
            "Premium Times Nigeria",
            "https://www.premiumtimesng.com/feed",
        ),
        FeedSource::new("Vanguard Nigeria", "https://www.vanguardngr.com/feed/"),
        FeedSource::new("Channels TV Nigeria", "https://www.channelstv.com/feed/"),
        // North Africa
        FeedSource::new("Egypt Today", "https://www.egypttoday.com/RSS"),
        FeedSource::new(
            "Middle East Eye Africa",
            "https://www.middleeasteye.net/countries/africa.rss",
        ),
        // Business & economy
        FeedSource::new(
            "Business Day",
            "https://www.businesslive.co.za/rss/?publication=business-day",
        ),
        FeedSource::new(
            "How We Made It In Africa",
            "https://www.howwemadeitinafrica.com/feed/",
        ),
        FeedSource::new(
            "Business Insider SA",
            "https://www.businessinsider.co.za/feeds/rss",
        ),
        FeedSource::new("African Independent", "https://africanindy.com/feed/"),
        // Tech & innovation
        FeedSource::new("Techpoint Africa", "https://techpoint.africa/feed/"),
        FeedSource::new("Disrupt Africa", "https://disrupt-africa.com/feed/"),
        FeedSource::new(
            "TechCrunch Africa",
            "https://techcrunch.com/tag/africa/feed/",
        ),
        FeedSource::new("Ventureburn", "https://ventureburn.com/feed/"),
        // Sports
        FeedSource::new("SuperSport", "https://www.supersport.com/rss/news.xml"),
        FeedSource::new("Goal Africa", "https://www.goal.com/en-za/feeds/news"),
        // General/mixed
        FeedSource::new("African Arguments", "https://africanarguments.org/feed/"),
        FeedSource::new("Quartz Africa", "https://qz.com/africa/feed"),
        FeedSource::new(
            "The Conversation Africa",
            "https://theconversation.com/africa/articles.atom",
        ),
    ]
}

/// Lowercase, dash-separated form of a source name. Article ids start with
/// this prefix.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
