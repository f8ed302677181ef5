//! Sample-data seeding.
//!
//! Disabled by default; enabled with `SEED_SAMPLE_DATA=true`. Inserts the
//! starter catalog into any collection that is still empty, going through
//! the normal mutation services so ids and timestamps are stamped like any
//! other create.

use std::num::NonZeroU32;

use finlearn_core::domain::{
    BlogCategory, BlogFields, CourseCategory, CourseFields, Difficulty, TermFields,
};
use finlearn_core::error::StoreError;

use crate::state::AppState;

pub async fn run(state: &AppState) -> Result<(), StoreError> {
    if state.courses.all().await?.is_empty() {
        for fields in sample_courses() {
            state.courses.create(fields).await?;
        }
        tracing::info!("Sample courses added");
    }

    if state.blogs.all().await?.is_empty() {
        for fields in sample_blogs() {
            state.blogs.create(fields).await?;
        }
        tracing::info!("Sample blogs added");
    }

    if state.dictionary.all().await?.is_empty() {
        for fields in sample_terms() {
            state.dictionary.create(fields).await?;
        }
        tracing::info!("Sample dictionary terms added");
    }

    Ok(())
}

fn sample_courses() -> Vec<CourseFields> {
    vec![
        CourseFields {
            title: "Stock Market Fundamentals".to_string(),
            description: "Learn the basic concepts of stock market investing including stocks, \
                          bonds, and mutual funds."
                .to_string(),
            category: CourseCategory::Novice,
            image_url: "https://www.5paisa.com/finschool/wp-content/uploads/2021/10/pana-1.svg"
                .to_string(),
            difficulty: Difficulty::Beginner,
            duration: const { NonZeroU32::new(120).unwrap() },
            is_active: true,
        },
        CourseFields {
            title: "Value Investing Strategies".to_string(),
            description: "Master the art of value investing with Warren Buffett's proven \
                          strategies."
                .to_string(),
            category: CourseCategory::Investor,
            image_url:
                "https://www.5paisa.com/finschool/wp-content/uploads/2025/07/Investor-courses-cat.png"
                    .to_string(),
            difficulty: Difficulty::Intermediate,
            duration: const { NonZeroU32::new(180).unwrap() },
            is_active: true,
        },
        CourseFields {
            title: "Technical Analysis & Chart Patterns".to_string(),
            description: "Advanced trading techniques using technical indicators and chart \
                          patterns."
                .to_string(),
            category: CourseCategory::Trader,
            image_url:
                "https://www.5paisa.com/finschool/wp-content/uploads/2025/07/trader-courses-cat.png"
                    .to_string(),
            difficulty: Difficulty::Advanced,
            duration: const { NonZeroU32::new(240).unwrap() },
            is_active: true,
        },
    ]
}

fn sample_blogs() -> Vec<BlogFields> {
    vec![
        BlogFields {
            title: "Understanding Bull and Bear Markets".to_string(),
            content: "In this comprehensive guide, we explore the characteristics of bull and \
                      bear markets, how to identify them, and strategies to navigate through \
                      different market conditions..."
                .to_string(),
            category: BlogCategory::Blogs,
            author: "FinLearn Team".to_string(),
            image_url:
                "https://static.vecteezy.com/system/resources/previews/003/042/125/original/content-writer-or-blogger-start-new-blog-writing-article-online-vector.jpg"
                    .to_string(),
            summary: "A detailed guide to understanding market cycles and trends".to_string(),
            read_time: const { NonZeroU32::new(8).unwrap() },
            is_published: true,
        },
        BlogFields {
            title: "What's Happening in IPO Markets?".to_string(),
            content: "The latest trends in Initial Public Offerings (IPOs) and what investors \
                      should watch out for in the current market scenario..."
                .to_string(),
            category: BlogCategory::WhatsBrewing,
            author: "Market Analyst".to_string(),
            image_url: "https://www.5paisa.com/finschool/wp-content/uploads/2023/06/2-1.svg"
                .to_string(),
            summary: "Stay updated with the latest IPO market trends".to_string(),
            read_time: const { NonZeroU32::new(5).unwrap() },
            is_published: true,
        },
        BlogFields {
            title: "The Story of a First-Time Investor".to_string(),
            content: "Follow Raj's journey from a complete novice to a confident investor. \
                      Learn from his mistakes and successes..."
                .to_string(),
            category: BlogCategory::Stories,
            author: "FinLearn Team".to_string(),
            image_url: "https://www.5paisa.com/finschool/wp-content/uploads/2023/06/1-1.svg"
                .to_string(),
            summary: "An inspiring story of financial learning".to_string(),
            read_time: const { NonZeroU32::new(6).unwrap() },
            is_published: true,
        },
    ]
}

fn sample_terms() -> Vec<TermFields> {
    vec![
        TermFields {
            term: "Bull Market".to_string(),
            definition: "A financial market condition where prices are rising or are expected \
                         to rise. Bull markets are characterized by optimism, investor \
                         confidence, and expectations that strong results should continue."
                .to_string(),
            category: "Market Conditions".to_string(),
            example: "The stock market experienced a strong bull market throughout 2021, with \
                      major indices reaching all-time highs."
                .to_string(),
            related_terms: "Bear Market, Market Rally, Uptrend".to_string(),
        },
        TermFields {
            term: "Dividend".to_string(),
            definition: "A portion of a company's earnings distributed to shareholders, \
                         usually paid quarterly. Dividends can be issued as cash payments, \
                         shares of stock, or other property."
                .to_string(),
            category: "Stock Market".to_string(),
            example: "Apple Inc. paid a dividend of $0.23 per share in the last quarter."
                .to_string(),
            related_terms: "Dividend Yield, Ex-Dividend Date, Dividend Aristocrat".to_string(),
        },
        TermFields {
            term: "P/E Ratio".to_string(),
            definition: "Price-to-Earnings ratio is a valuation metric that compares a \
                         company's current share price to its per-share earnings. It helps \
                         investors determine if a stock is overvalued or undervalued."
                .to_string(),
            category: "Fundamental Analysis".to_string(),
            example: "A stock trading at $50 per share with earnings of $5 per share has a \
                      P/E ratio of 10."
                .to_string(),
            related_terms: "EPS, Valuation, Market Cap".to_string(),
        },
        TermFields {
            term: "IPO".to_string(),
            definition: "Initial Public Offering - the first time a company offers its shares \
                         to the public for purchase. This allows the company to raise capital \
                         from public investors."
                .to_string(),
            category: "Stock Market".to_string(),
            example: "Zomato went public with an IPO in July 2021, raising over ₹9,000 crores."
                .to_string(),
            related_terms: "Primary Market, Secondary Market, Public Listing".to_string(),
        },
    ]
}
