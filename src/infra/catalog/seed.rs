use crate::domain::models::{
    hall::{Hall, VipSeatOverride},
    movie::Movie,
    showtime::Showtime,
};

pub struct CatalogSeed {
    pub movies: Vec<Movie>,
    pub halls: Vec<Hall>,
    pub showtimes: Vec<Showtime>,
}

fn poster(photo: u32, width: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w={width}"
    )
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn showtime(id: &str, movie_id: &str, hall_id: &str, date: &str, time: &str, price: u64, vip_price: u64) -> Showtime {
    Showtime {
        id: id.into(),
        movie_id: movie_id.into(),
        hall_id: hall_id.into(),
        date: date.into(),
        time: time.into(),
        price,
        vip_price: Some(vip_price),
    }
}

/// The demo catalogue the service boots with.
pub fn seed_catalog() -> CatalogSeed {
    let movies = vec![
        Movie {
            id: "1".into(),
            title: "Wakanda Forever".into(),
            poster_url: poster(3062541, 800),
            backdrop_url: poster(3062541, 1920),
            release_date: "2022-11-11".into(),
            duration_min: 161,
            genres: strings(&["Action", "Adventure", "Sci-Fi"]),
            rating: 7.3,
            language: "English".into(),
            description: "Queen Ramonda, Shuri, M'Baku, Okoye and the Dora Milaje fight to protect their nation from intervening world powers in the wake of King T'Challa's death.".into(),
            director: "Ryan Coogler".into(),
            cast: strings(&["Letitia Wright", "Lupita Nyong'o", "Danai Gurira", "Winston Duke"]),
            trailer_url: Some("https://www.youtube.com/watch?v=_Z3QKkl1WyM".into()),
        },
        Movie {
            id: "2".into(),
            title: "A Quiet Place".into(),
            poster_url: poster(1200450, 800),
            backdrop_url: poster(1200450, 1920),
            release_date: "2018-04-06".into(),
            duration_min: 90,
            genres: strings(&["Horror", "Sci-Fi", "Thriller"]),
            rating: 7.5,
            language: "English".into(),
            description: "In a post-apocalyptic world, a family is forced to live in silence while hiding from monsters with ultra-sensitive hearing.".into(),
            director: "John Krasinski".into(),
            cast: strings(&["Emily Blunt", "John Krasinski", "Millicent Simmonds", "Noah Jupe"]),
            trailer_url: None,
        },
        Movie {
            id: "3".into(),
            title: "Inception".into(),
            poster_url: poster(2774556, 800),
            backdrop_url: poster(2774556, 1920),
            release_date: "2010-07-16".into(),
            duration_min: 148,
            genres: strings(&["Action", "Adventure", "Sci-Fi"]),
            rating: 8.8,
            language: "English".into(),
            description: "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.".into(),
            director: "Christopher Nolan".into(),
            cast: strings(&["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page", "Tom Hardy"]),
            trailer_url: None,
        },
        Movie {
            id: "4".into(),
            title: "The Dark Knight".into(),
            poster_url: poster(534283, 800),
            backdrop_url: poster(534283, 1920),
            release_date: "2008-07-18".into(),
            duration_min: 152,
            genres: strings(&["Action", "Crime", "Drama"]),
            rating: 9.0,
            language: "English".into(),
            description: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.".into(),
            director: "Christopher Nolan".into(),
            cast: strings(&["Christian Bale", "Heath Ledger", "Aaron Eckhart", "Michael Caine"]),
            trailer_url: None,
        },
        Movie {
            id: "5".into(),
            title: "Parasite".into(),
            poster_url: poster(3945317, 800),
            backdrop_url: poster(3945317, 1920),
            release_date: "2019-05-30".into(),
            duration_min: 132,
            genres: strings(&["Comedy", "Drama", "Thriller"]),
            rating: 8.6,
            language: "Korean".into(),
            description: "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.".into(),
            director: "Bong Joon Ho".into(),
            cast: strings(&["Song Kang-ho", "Lee Sun-kyun", "Cho Yeo-jeong", "Choi Woo-shik"]),
            trailer_url: None,
        },
        Movie {
            id: "6".into(),
            title: "Get Out".into(),
            poster_url: poster(3062542, 800),
            backdrop_url: poster(3062542, 1920),
            release_date: "2017-02-24".into(),
            duration_min: 104,
            genres: strings(&["Horror", "Mystery", "Thriller"]),
            rating: 7.7,
            language: "English".into(),
            description: "A young African-American visits his white girlfriend's parents for the weekend, where his simmering uneasiness about their reception of him eventually reaches a boiling point.".into(),
            director: "Jordan Peele".into(),
            cast: strings(&["Daniel Kaluuya", "Allison Williams", "Bradley Whitford", "Catherine Keener"]),
            trailer_url: None,
        },
    ];

    let imax_centre: Vec<u32> = (5..=16).collect();
    let halls = vec![
        Hall {
            id: "1".into(),
            name: "Main Hall".into(),
            rows: 10,
            seats_per_row: 16,
            vip_rows: vec![1, 2],
            vip_seats: vec![],
        },
        Hall {
            id: "2".into(),
            name: "VIP Hall".into(),
            rows: 8,
            seats_per_row: 12,
            vip_rows: vec![1, 2, 3, 4],
            vip_seats: vec![],
        },
        Hall {
            id: "3".into(),
            name: "IMAX Hall".into(),
            rows: 12,
            seats_per_row: 20,
            vip_rows: vec![1, 2, 3],
            vip_seats: vec![
                VipSeatOverride { row: 4, seats: imax_centre.clone() },
                VipSeatOverride { row: 5, seats: imax_centre },
            ],
        },
    ];

    let showtimes = vec![
        showtime("1", "1", "1", "2025-06-15", "18:30", 15000, 25000),
        showtime("2", "1", "2", "2025-06-15", "21:00", 18000, 30000),
        showtime("3", "2", "3", "2025-06-15", "19:00", 20000, 35000),
        showtime("4", "3", "1", "2025-06-16", "17:30", 15000, 25000),
        showtime("5", "4", "2", "2025-06-16", "20:00", 18000, 30000),
        showtime("6", "5", "3", "2025-06-17", "18:30", 20000, 35000),
    ];

    CatalogSeed { movies, halls, showtimes }
}
