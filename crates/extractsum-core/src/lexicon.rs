//! Rhetorical keyword taxonomy, stopwords and abbreviation list.
//!
//! Built once at startup and shared by reference (usually behind an `Arc`)
//! with every stage that needs it. Nothing mutates it afterwards.

use std::collections::HashSet;

/// One rhetorical category and its trigger terms. Terms may be multi-word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCategory {
    pub name: String,
    pub terms: Vec<String>,
}

/// Immutable lexical resources for segmentation and rhetorical scoring.
#[derive(Debug, Clone)]
pub struct Lexicon {
    categories: Vec<KeywordCategory>,
    flat_terms: HashSet<String>,
    stopwords: HashSet<String>,
    abbreviations: Vec<String>,
}

const TAXONOMY: &[(&str, &[&str])] = &[
    (
        "Obligations",
        &[
            "needs", "required", "shall", "must", "compliance", "bound", "obligated", "agrees",
            "agreed", "agree", "committed", "commit", "duty", "responsible",
        ],
    ),
    (
        "Rights",
        &[
            "can", "may", "reserves", "right to", "right at", "permitted", "authority",
            "authorize", "entitled", "privilege",
        ],
    ),
    (
        "Conditions",
        &["if", "provided", "subject to", "case", "unless", "otherwise", "under", "condition"],
    ),
    (
        "Exclusions of Liability",
        &[
            "responsibility", "liable", "free", "liability", "excludes", "accountable",
            "disclaims",
        ],
    ),
    (
        "Warranties and Disclaimers",
        &["warranty", "warranties", "guarantee", "guaranteed", "guarantees", "assurance"],
    ),
    (
        "Contrast/Concession",
        &[
            "products and services", "but", "however", "even", "although", "notwithstanding",
            "despite", "spite", "nevertheless", "nonetheless", "contrast",
        ],
    ),
    (
        "Cause and Effect",
        &[
            "access to", "because", "result", "thus", "consequently", "since", "therefore",
            "consequence", "hence",
        ],
    ),
    (
        "Addition",
        &[
            "terms and conditions", "products or services", "also", "additionally",
            "as well as", "furthermore", "moreover", "besides",
        ],
    ),
    (
        "Comparison/Similarity",
        &["way", "similar", "same", "similarly", "equally"],
    ),
    ("Condition", &["long as"]),
    (
        "Purpose",
        &[
            "in order", "time to time", "information that", "so that", "purpose", "goal",
            "objective", "intention", "aim",
        ],
    ),
];

const STOPWORDS: &[&str] = &[
    "the", "is", "of", "a", "on", "for", "with", "it", "by", "this", "from", "an", "be", "was",
    "were", "are",
];

/// Abbreviations that must not end a sentence. `e.g` and `i.e` keep their
/// inner dot, which the segmenter treats as "any character".
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "dr", "ms", "inc", "ltd", "prof", "sr", "jr", "st", "mt", "vs", "amp", "faq",
    "etc", "e.g", "i.e",
];

impl Lexicon {
    /// The taxonomy, stopwords and abbreviations used for terms-of-service text.
    pub fn standard() -> Self {
        let categories = TAXONOMY
            .iter()
            .map(|(name, terms)| KeywordCategory {
                name: (*name).to_string(),
                terms: terms.iter().map(|t| (*t).to_string()).collect(),
            })
            .collect();
        Self::new(
            categories,
            STOPWORDS.iter().map(|s| (*s).to_string()).collect(),
            ABBREVIATIONS.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    pub fn new(
        categories: Vec<KeywordCategory>,
        stopwords: Vec<String>,
        abbreviations: Vec<String>,
    ) -> Self {
        let flat_terms = categories
            .iter()
            .flat_map(|c| c.terms.iter().cloned())
            .collect();
        Self {
            categories,
            flat_terms,
            stopwords: stopwords.into_iter().collect(),
            abbreviations,
        }
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    /// Exact-match lookup against every term of every category.
    pub fn is_keyword(&self, token: &str) -> bool {
        self.flat_terms.contains(token)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
