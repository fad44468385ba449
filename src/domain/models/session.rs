use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::domain::models::seat::{Seat, SeatKey};
use crate::domain::models::selection::Selection;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionState {
    pub id: String,
    pub selection: Option<Selection>,
    pub layout: Vec<Seat>,
    pub active_booking_id: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl SessionState {
    pub fn new(id: String) -> Self {
        Self {
            id,
            selection: None,
            layout: Vec::new(),
            active_booking_id: None,
            updated_at: Utc::now(),
        }
    }

    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn layout_seat(&self, key: SeatKey) -> Option<&Seat> {
        self.layout.iter().find(|s| s.key() == key)
    }

    pub fn reset_selection(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.reset();
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
