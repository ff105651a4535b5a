//! Pre-selected texts offered by the demo for one-click analysis.

use super::record::Category;

pub const FACTUAL: &[&str] = &[
    "Climate change has caused global temperatures to rise by approximately 1.1°C since pre-industrial times, according to NASA data.",
    "The stock market closed at 4,500 points today, representing a 2.3% increase from yesterday's closing price.",
    "Research conducted by Stanford University in 2023 found that 73% of participants showed improved cognitive function after the treatment.",
    "The population of Tokyo is approximately 14 million people as of 2024, making it one of the world's largest metropolitan areas.",
];

pub const EMOTIONAL: &[&str] = &[
    "I absolutely love this new restaurant! The food is amazing and the service is incredible.",
    "This movie was a complete disaster. I can't believe I wasted two hours of my life watching it.",
    "I'm so excited about my upcoming vacation! It's going to be the best trip ever.",
    "I hate how crowded the subway gets during rush hour. It's absolutely terrible and makes me so frustrated.",
];

/// Every sample paired with the category it is offered as
pub fn all() -> impl Iterator<Item = (Category, &'static str)> {
    FACTUAL
        .iter()
        .map(|text| (Category::Fact, *text))
        .chain(EMOTIONAL.iter().map(|text| (Category::Emotion, *text)))
}
