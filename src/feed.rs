use crate::common::*;
use crate::error::Result;
use crate::roll::{Eval, RollResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub result: RollResult,
}

impl FeedItem {
    pub fn new(result: RollResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            result,
        }
    }
}

/// In-memory history of rolls, newest first.
#[derive(Debug, Default, Clone)]
pub struct Feed {
    items: VecDeque<FeedItem>,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps `result` and puts it at the front of the feed.
    pub fn push(&mut self, result: RollResult) -> &FeedItem {
        self.push_item(FeedItem::new(result))
    }

    pub fn push_item(&mut self, item: FeedItem) -> &FeedItem {
        log::debug!(
            "feed item {} {:?} = {}",
            item.id,
            item.result.name().unwrap_or_default(),
            item.result.value()
        );
        self.items.push_front(item);
        &self.items[0]
    }

    pub fn latest(&self) -> Option<&FeedItem> {
        self.items.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedItem> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }
}
