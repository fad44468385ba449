use serde::{Deserialize, Serialize};
use crate::domain::models::seat::{Seat, SeatKey};

/// Seats one session has picked for a single showtime.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Selection {
    pub movie_id: String,
    pub showtime_id: String,
    pub seats: Vec<Seat>,
}

impl Selection {
    pub fn new(movie_id: impl Into<String>, showtime_id: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            showtime_id: showtime_id.into(),
            seats: Vec::new(),
        }
    }

    pub fn is_for(&self, movie_id: &str, showtime_id: &str) -> bool {
        self.movie_id == movie_id && self.showtime_id == showtime_id
    }

    pub fn contains(&self, key: SeatKey) -> bool {
        self.seats.iter().any(|s| s.key() == key)
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Adds or removes `seat`. Occupied seats are ignored. Returns whether
    /// the membership changed.
    pub fn toggle(&mut self, seat: &Seat) -> bool {
        if seat.is_occupied {
            return false;
        }

        let key = seat.key();
        if self.contains(key) {
            self.seats.retain(|s| s.key() != key);
        } else {
            self.seats.push(Seat { is_selected: true, ..seat.clone() });
        }
        true
    }

    pub fn reset(&mut self) {
        self.seats.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(selection: &Selection) -> Vec<SeatKey> {
        let mut keys: Vec<SeatKey> = selection.seats.iter().map(Seat::key).collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_toggle_adds_and_marks_selected() {
        let mut selection = Selection::new("1", "1");
        assert!(selection.toggle(&Seat::new(3, 4, false, false)));
        assert_eq!(selection.len(), 1);
        assert!(selection.seats[0].is_selected);
        assert!(selection.contains(SeatKey::new(3, 4)));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut selection = Selection::new("1", "1");
        selection.toggle(&Seat::new(1, 1, true, false));
        selection.toggle(&Seat::new(2, 7, false, false));
        let before = keys(&selection);

        for seat in [Seat::new(2, 7, false, false), Seat::new(9, 9, false, false)] {
            selection.toggle(&seat);
            selection.toggle(&seat);
            assert_eq!(keys(&selection), before);
        }
    }

    #[test]
    fn test_toggle_matches_by_coordinates() {
        let mut selection = Selection::new("1", "1");
        selection.toggle(&Seat::new(4, 4, false, false));
        // Same seat coming back from the layout with its selected flag set.
        let mut echoed = Seat::new(4, 4, false, false);
        echoed.is_selected = true;
        selection.toggle(&echoed);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_occupied_seat_is_ignored() {
        let mut selection = Selection::new("1", "1");
        selection.toggle(&Seat::new(1, 1, false, false));
        let before = selection.clone();

        assert!(!selection.toggle(&Seat::new(6, 2, false, true)));
        assert_eq!(selection, before);

        // Even when the coordinates are already selected, an occupied seat never changes it.
        assert!(!selection.toggle(&Seat::new(1, 1, false, true)));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_reset_empties() {
        let mut selection = Selection::new("1", "2");
        selection.toggle(&Seat::new(1, 1, false, false));
        selection.reset();
        assert!(selection.is_empty());
        assert!(selection.is_for("1", "2"));
    }
}
