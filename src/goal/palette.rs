//! Fixed lookup tables from goal attributes to display tokens

use super::model::{Category, Priority};
use super::progress::StatusBucket;

pub fn category_color(category: &Category) -> &'static str {
    match category {
        Category::Health => "blue",
        Category::Career => "purple",
        Category::Finance => "green",
        Category::Personal => "orange",
        Category::Education => "yellow",
        Category::Wellness => "teal",
        Category::Other(_) => "gray",
    }
}

pub fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "destructive",
        Priority::Medium => "secondary",
        Priority::Low => "outline",
    }
}

pub fn status_color(bucket: StatusBucket) -> &'static str {
    match bucket {
        StatusBucket::Completed => "green",
        StatusBucket::InProgress => "blue",
        StatusBucket::NotStarted => "red",
    }
}
