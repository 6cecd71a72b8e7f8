//! Built-in reference tables.
//!
//! These are the tables used when no `.truthpulserc.json` overrides them. Fact
//! pattern order is significant: the first matching pattern wins.

use std::collections::BTreeMap;

use super::tables::{Credibility, EconomicTerm, FactPattern, KeywordMatch};

pub const DEFAULT_EXPLANATION: &str = "Unable to determine credibility automatically. The statement may \
contain nuanced or ambiguous claims that require context-specific research. Please consult \
multiple trusted sources for verification.";

pub const SUPPORT_MESSAGE: &str = "It's natural to feel anxious when reading alarming headlines. \
Try a simple box-breathing exercise to ground yourself: sit or stand comfortably and breathe \
in slowly while counting to four, hold your breath for four seconds, exhale for four seconds, \
and wait for another four seconds before breathing in again. Repeat this cycle a few times. \
If persistent worry interferes with daily life, consider reaching out to a mental health \
professional or trusted friend for support.";

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn default_fact_patterns() -> Vec<FactPattern> {
    vec![
        FactPattern {
            keywords: strings(&[
                "recession",
                "economy is in recession",
                "jobs vanishing",
                "jobs are vanishing",
                "vanishing jobs",
            ]),
            credibility: Credibility::ModeratelyCredible,
            explanation: "Recent economic data show a slowdown in certain industries, but the \
United States is not officially in a recession. The unemployment rate was 4.1% in June 2025, \
within the 4.0-4.2% range seen since May 2024, suggesting that the labour market remains \
broadly stable. Economists typically define a recession as two consecutive quarters of \
declining GDP or, more formally, a significant decline in economic activity across the \
economy lasting more than a few months. So while some sectors are cutting jobs, most analysts \
do not yet characterise the current environment as a recession."
                .to_string(),
            sources: strings(&[
                "U.S. Bureau of Labor Statistics: unemployment rate data",
                "International Monetary Fund: definition of recession",
            ]),
            match_mode: KeywordMatch::Any,
        },
        FactPattern {
            keywords: strings(&[
                "vaccines cause autism",
                "vaccine causes autism",
                "vaccines and autism",
                "vaccine linked to autism",
            ]),
            credibility: Credibility::False,
            explanation: "Multiple large studies have found no association between vaccines and \
autism. A small 1998 study that suggested a link between the MMR vaccine and autism was later \
retracted, and the lead author's conclusions were widely discredited. Subsequent research has \
shown no causal relationship. Claims that vaccines cause autism are therefore unsupported by \
evidence."
                .to_string(),
            sources: strings(&[
                "Johns Hopkins Bloomberg School of Public Health: evidence on vaccines and autism",
            ]),
            match_mode: KeywordMatch::Any,
        },
        FactPattern {
            keywords: strings(&[
                "climate change is natural",
                "climate change is not caused by humans",
                "climate change hoax",
                "global warming is natural",
            ]),
            credibility: Credibility::False,
            explanation: "Scientists agree that the recent warming trend cannot be explained by \
natural factors alone. Human activities, primarily the burning of fossil fuels, have released \
large amounts of greenhouse gases into the atmosphere, causing the climate to warm. The U.S. \
EPA notes that the long-term warming trend observed since the Industrial Revolution is \
extremely likely (>95%) to be due to human activities."
                .to_string(),
            sources: strings(&["U.S. Environmental Protection Agency: causes of climate change"]),
            match_mode: KeywordMatch::Any,
        },
        FactPattern {
            keywords: strings(&["nuclear submarines", "trump", "russia"]),
            credibility: Credibility::Unclear,
            explanation: "This is a complex geopolitical action. The credibility depends on \
whether it was confirmed by reliable news agencies or official statements."
                .to_string(),
            sources: strings(&[
                "https://www.reuters.com",
                "https://www.nytimes.com",
                "https://www.factcheck.org",
            ]),
            match_mode: KeywordMatch::All,
        },
    ]
}

pub fn default_emotional_words() -> BTreeMap<String, String> {
    [
        ("vanishing", "declining"),
        ("vanish", "decline"),
        ("plummeting", "decreasing"),
        ("plunge", "drop"),
        ("soaring", "increasing"),
        ("skyrocketing", "rising"),
        ("exploding", "rising"),
        ("crisis", "challenge"),
        ("disaster", "difficult situation"),
        ("booming", "growing"),
        ("catastrophic", "severe"),
        ("collapse", "sharp decline"),
        ("miracle", "unexpected increase"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

pub fn default_positive_words() -> Vec<String> {
    strings(&[
        "growth",
        "increase",
        "increasing",
        "stable",
        "improve",
        "improvement",
        "progress",
        "low",
        "benefit",
        "opportunity",
        "strength",
    ])
}

pub fn default_negative_words() -> Vec<String> {
    strings(&[
        "vanish",
        "vanishing",
        "loss",
        "losses",
        "decline",
        "declining",
        "fall",
        "drop",
        "high",
        "collapse",
        "recession",
        "crisis",
        "anxiety",
        "stress",
        "fear",
        "panic",
        "decrease",
        "decreasing",
    ])
}

pub fn default_economic_terms() -> Vec<EconomicTerm> {
    [
        (
            "recession",
            "A recession refers to a significant decline in economic activity spread across the \
economy and lasting more than a few months. Many commentators use a practical rule of thumb of \
two consecutive quarters of negative GDP growth, but formal definitions consider broader \
indicators such as employment, income and industrial production.",
        ),
        (
            "inflation",
            "Inflation is the rate of increase in prices over time. It measures how much more \
expensive a basket of goods and services has become, often expressed on an annual basis. \
Central banks aim for low and stable inflation to encourage economic growth while protecting \
purchasing power.",
        ),
        (
            "gdp",
            "Gross domestic product (GDP) is the monetary value of all final goods and services \
produced within a country in a given period. Changes in GDP, reported quarterly and annually, \
are a key gauge of economic growth.",
        ),
        (
            "unemployment",
            "The unemployment rate measures the number of people without a job who are actively \
seeking work as a share of the labour force (the employed plus the unemployed). A low \
unemployment rate signals a strong labour market, while a high rate suggests slack.",
        ),
    ]
    .into_iter()
    .map(|(term, definition)| EconomicTerm {
        term: term.to_string(),
        definition: definition.to_string(),
    })
    .collect()
}

pub fn default_anxiety_keywords() -> Vec<String> {
    strings(&[
        "anxious",
        "anxiety",
        "worried",
        "worry",
        "panic",
        "afraid",
        "scared",
        "stress",
        "stressed",
        "nervous",
        "overwhelmed",
    ])
}

pub fn default_explanation() -> String {
    DEFAULT_EXPLANATION.to_string()
}

pub fn default_support_message() -> String {
    SUPPORT_MESSAGE.to_string()
}
