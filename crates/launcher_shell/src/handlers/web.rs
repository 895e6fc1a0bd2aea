//! Handlers backed by web collaborators: search, weather, news, and email.

use launcher_contract::ShellError;
use url::form_urlencoded;

use crate::context::ExecutionContext;
use crate::services::{title_case, Article, MailDraft, NewsQuery, NEWS_CATEGORIES};

const NEWS_USAGE: &str = "Usage:
- news countries : List all available countries
- news categories : List all available categories
- news category <category> : Get news by category
- news country <country_name> : Get news by country
- news country-category <country_name> <category> : Get news by country and category

Example:
- news country united states
- news category technology
- news country-category united kingdom sports";

const EMAIL_USAGE: &str = "Usage: email <recipient> <subject>";

/// Builds the search URL for `query` under `prefix`.
pub(crate) fn search_url(prefix: &str, query: &str) -> String {
    let encoded = form_urlencoded::byte_serialize(query.as_bytes()).collect::<String>();
    format!("{prefix}{encoded}")
}

pub(crate) fn search(arguments: &[String], ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let query = arguments.join(" ");
    let query = query.trim();
    let url = search_url(&ctx.config.search_url, query);
    tracing::debug!(%url, "opening search");
    ctx.services
        .opener
        .open_url(&url)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))?;
    ctx.info(format!(
        "Search query sent to {}: {query}",
        ctx.config.search_engine_name
    ));
    Ok(())
}

pub(crate) fn weather(arguments: &[String], ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let city = arguments.join(" ");
    let city = city.trim();
    if city.is_empty() {
        return Err(ShellError::usage("Usage: weather <city_name>"));
    }
    let report = ctx
        .services
        .weather
        .current(city)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))?;
    ctx.info(report.to_string());
    Ok(())
}

/// One parsed `news` request.
enum NewsRequest {
    Countries,
    Categories,
    Fetch(NewsQuery),
}

fn is_news_category(category: &str) -> bool {
    NEWS_CATEGORIES.contains(&category)
}

fn parse_news(arguments: &[String]) -> Option<NewsRequest> {
    let (subcommand, rest) = arguments.split_first()?;
    let rest = rest
        .iter()
        .map(String::as_str)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>();
    match (subcommand.to_lowercase().as_str(), rest.as_slice()) {
        ("countries", []) => Some(NewsRequest::Countries),
        ("categories", []) => Some(NewsRequest::Categories),
        ("category", [category]) => {
            let category = category.to_lowercase();
            is_news_category(&category).then_some(NewsRequest::Fetch(NewsQuery::Category(category)))
        }
        ("country", country @ [_, ..]) => {
            Some(NewsRequest::Fetch(NewsQuery::Country(country.join(" "))))
        }
        ("country-category", [country @ .., category]) if !country.is_empty() => {
            let category = category.to_lowercase();
            is_news_category(&category).then(|| {
                NewsRequest::Fetch(NewsQuery::CountryCategory {
                    country: country.join(" "),
                    category,
                })
            })
        }
        _ => None,
    }
}

fn format_articles(query: &NewsQuery, articles: &[Article]) -> String {
    if articles.is_empty() {
        return "No news articles found.".to_string();
    }
    let mut header = String::from("=== Latest News ===");
    match query {
        NewsQuery::Category(category) => {
            header.push_str(&format!(" - {} category", title_case(category)));
        }
        NewsQuery::Country(country) => header.push_str(&format!(" for {}", title_case(country))),
        NewsQuery::CountryCategory { country, category } => header.push_str(&format!(
            " for {} - {} category",
            title_case(country),
            title_case(category)
        )),
    }

    let mut text = header;
    for (index, article) in articles.iter().enumerate() {
        text.push_str(&format!("\n\n{}. {}\n", index + 1, article.title));
        text.push_str(&format!("   Source: {}\n", article.source));
        text.push_str(&format!("   Published: {}\n", article.published));
        if let Some(description) = article.description.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!("   Description: {description}\n"));
        }
        text.push_str(&format!("   URL: {}", article.url));
    }
    text
}

pub(crate) fn news(arguments: &[String], ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let Some(request) = parse_news(arguments) else {
        return Err(ShellError::usage(NEWS_USAGE));
    };
    let text = match request {
        NewsRequest::Countries => {
            let mut countries = ctx.services.news.countries();
            countries.sort();
            format!("Available Countries:\n{}", countries.join("\n"))
        }
        NewsRequest::Categories => {
            format!("Available Categories:\n{}", NEWS_CATEGORIES.join("\n"))
        }
        NewsRequest::Fetch(query) => {
            let articles = ctx
                .services
                .news
                .headlines(&query)
                .map_err(|err| ShellError::execution(format!("Error fetching news: {err}")))?;
            format_articles(&query, &articles)
        }
    };
    ctx.info(text);
    Ok(())
}

pub(crate) fn email(arguments: &[String], ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let Some((recipient, subject)) = arguments.split_first() else {
        return Err(ShellError::usage(EMAIL_USAGE));
    };
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(ShellError::usage(EMAIL_USAGE));
    }
    let valid = recipient
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid {
        return Err(ShellError::usage(format!(
            "Error: Invalid recipient address '{recipient}'."
        )));
    }
    let draft = MailDraft {
        recipient: recipient.to_string(),
        subject: subject.join(" ").trim().to_string(),
        body: String::new(),
    };
    ctx.services
        .mail
        .compose(&draft)
        .map_err(|err| ShellError::execution(format!("Error: {err}")))?;
    ctx.info(format!("Composing email to {recipient}."));
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    fn query(words: &[&str]) -> Option<NewsQuery> {
        match parse_news(&args(words))? {
            NewsRequest::Fetch(query) => Some(query),
            _ => None,
        }
    }

    #[test]
    fn search_url_encodes_query() {
        assert_eq!(
            search_url("https://www.google.com/search?q=", "rust & c++"),
            "https://www.google.com/search?q=rust+%26+c%2B%2B"
        );
    }

    #[test]
    fn news_subcommands_parse() {
        assert_eq!(
            query(&["category", "Technology"]),
            Some(NewsQuery::Category("technology".to_string()))
        );
        assert_eq!(
            query(&["country", "united", "states"]),
            Some(NewsQuery::Country("united states".to_string()))
        );
        assert_eq!(
            query(&["country-category", "united", "kingdom", "sports"]),
            Some(NewsQuery::CountryCategory {
                country: "united kingdom".to_string(),
                category: "sports".to_string(),
            })
        );
        assert!(matches!(
            parse_news(&args(&["countries"])),
            Some(NewsRequest::Countries)
        ));
    }

    #[test]
    fn invalid_news_arguments_fall_back_to_usage() {
        assert!(parse_news(&args(&["category", "gossip"])).is_none());
        assert!(parse_news(&args(&["category"])).is_none());
        assert!(parse_news(&args(&["country-category", "sports"])).is_none());
        assert!(parse_news(&args(&["weather"])).is_none());
    }

    #[test]
    fn articles_render_numbered_blocks() {
        let articles = vec![Article {
            title: "Launch day".to_string(),
            source: "Wire".to_string(),
            published: "2024-05-01 09:30".to_string(),
            description: Some("Rockets went up.".to_string()),
            url: "https://example.com/a".to_string(),
        }];
        assert_eq!(
            format_articles(&NewsQuery::Category("science".to_string()), &articles),
            "=== Latest News === - Science category\n\n1. Launch day\n   Source: Wire\n   Published: 2024-05-01 09:30\n   Description: Rockets went up.\n   URL: https://example.com/a"
        );
        assert_eq!(
            format_articles(&NewsQuery::Country("peru".to_string()), &[]),
            "No news articles found."
        );
    }
}
