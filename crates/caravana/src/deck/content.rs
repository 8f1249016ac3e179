//! Static text and asset references shown on the slides.

pub const TITLE: &str = "CARAVANA";
pub const TAGLINE: &str = "A musical caravan journeying through the sands of Rajasthan";

pub mod opening {
    pub const HEADLINE: &str = "Music of the Desert of Rajasthan";
    pub const COUNTRY: &str = "INDIA";
}

pub mod welcome {
    pub const LEAD: &str = "Welcome to the world of";
}

pub struct Artist {
    pub name: &'static str,
    pub note: &'static str,
}

const fn artist(name: &'static str, note: &'static str) -> Artist {
    Artist { name, note }
}

pub mod collaborations {
    use super::{Artist, artist};

    pub const INTRO: &str = "Performed with some of the most prestigious musicians";
    pub const OUTRO: &str = "Hypnotising viewers in all corners of the globe with their mystical \
        & ecstatic musical performances that deeply touch the heart & soul";

    pub const COLUMNS: [(&str, &[Artist]); 3] = [
        (
            "Legends",
            &[
                artist("George Harrison", "The Beatles"),
                artist("Sir Mick Jagger", ""),
                artist("Sting", ""),
            ],
        ),
        (
            "Grammy Winners",
            &[
                artist("Wouter Kellerman", "Multi Grammy Award Winner Flutist"),
                artist("Zakir Hussain", "Multi Grammy Award Winner Tabla"),
                artist("Ravi Shankar", "Multi Grammy Award Winner Sitar"),
                artist("Vishwa Mohan Bhatt", "Multi Grammy Award Winner Slide Guitar"),
                artist("Yossi Fine", "Grammy Winner & Multi Platinum"),
            ],
        ),
        (
            "Dance & Theatre",
            &[
                artist("Pina Bausch", "Award Winning Choreographer"),
                artist("Andres Marin", "Flamenco Legend"),
                artist("Zingaro de Bartabas", "3-Year Paris Residence"),
            ],
        ),
    ];
}

pub mod venues {
    pub const INTRO: &str = "They have sold out concerts in the most prestigious venues worldwide";
    pub const KICKER: &str = "TO NAME A FEW";
    /// Delay between consecutive venue lines once the list is revealed.
    pub const STAGGER_MS: u64 = 120;

    pub const VENUES: [&str; 8] = [
        "Royal Albert Hall, London",
        "Sydney Opera House, Australia",
        "Carnegie Hall, New York",
        "Barbican Centre, London",
        "Theatre de la Ville, Paris",
        "National Concert Hall, Dublin",
        "Konzerthaus, Berlin",
        "Concertgebouw, Amsterdam",
    ];
}

pub mod accolades {
    pub const LINES: [&str; 5] = [
        "Grammy-nominated artists",
        "Featured in UNESCO World Heritage performances",
        "40+ years of musical legacy",
        "Collaborated with world-renowned composers",
        "Ambassadors of Rajasthani folk music",
    ];
}

pub mod heritage {
    pub const BACKGROUND: &str = "/assets/Images/PAGE_6_PHOTO.jpg";
    pub const HEADING: &str = "CARAVANA - THE MANGANIYAR MUSICIANS";

    /// Paragraphs paired with the reveal stage that shows them.
    pub const PARAGRAPHS: [(usize, &str); 5] = [
        (
            0,
            "A caste of hereditary musicians from the Thar Desert in Rajasthan, India",
        ),
        (
            1,
            "Famed for preserving oral histories & devotional poetry through captivating songs for centuries.",
        ),
        (
            2,
            "They are vital custodians of Rajasthani culture, keeping desert tradition alive through \
             melody & rhythm, creating haunting melodies used for storytelling using distinctive \
             instruments exclusive to their community.",
        ),
        (
            3,
            "Several musicians have received highest awards in Music, such as The Padma Shri, one of \
             the highest civilian awards of the Republic of India.",
        ),
        (
            3,
            "They are truly grand masters in their arts and are recognised globally as such.",
        ),
    ];
    pub const OUTRO: &str = "Generation after Generation. After Generation.";
}

pub mod bridge {
    pub const BACKGROUND: &str = "/assets/Images/PAGE_7_PHOTO.jpg";

    pub const PARAGRAPHS: [(usize, &str); 4] = [
        (
            0,
            "Songs honouring Sufi Saints, Hindu deities, tell ancient folk stories and simple village life.",
        ),
        (1, "Their music acts as a spiritual and cultural bridge"),
        (
            2,
            "The relevance of this could not hold any higher importance in our times today, in our \
             torn-world of separation we find today.",
        ),
        (
            2,
            "The Manganiyars being torch-bearers of some of these key components of a healthy society:",
        ),
    ];
    pub const VALUES: [&str; 5] = ["Unity", "Community", "Togetherness", "Tolerance", "Acceptance"];
}

pub mod gallery {
    use std::time::Duration;

    pub const PHOTO_DURATION: Duration = Duration::from_millis(4_000);

    pub const PHOTOS: [&str; 11] = [
        "/assets/Slideshow/1.jpg",
        "/assets/Slideshow/2...jpg",
        "/assets/Slideshow/3...jpg",
        "/assets/Slideshow/4.jpg",
        "/assets/Slideshow/5...jpg",
        "/assets/Slideshow/6....jpg",
        "/assets/Slideshow/7...jpg",
        "/assets/Slideshow/8...jpg",
        "/assets/Slideshow/9.jpg",
        "/assets/Slideshow/10.jpg",
        "/assets/Slideshow/11.jpg",
    ];
}

pub struct Region {
    pub name: &'static str,
    pub places: &'static [&'static str],
    /// RGB marker colour.
    pub color: [u8; 3],
    /// Marker position on the map, in percent of its width and height.
    pub position: (f32, f32),
}

pub mod world_tour {
    use super::Region;
    use std::time::Duration;

    pub const MAP: &str = "/assets/Images/SL-070722-51460-10.jpg";
    pub const REGION_DURATION: Duration = Duration::from_millis(5_000);

    pub const REGIONS: [Region; 4] = [
        Region {
            name: "EUROPE",
            places: &[
                "United Kingdom",
                "Germany",
                "France",
                "Italy",
                "Spain",
                "Belgium",
                "Austria",
                "Switzerland",
                "Portugal",
                "Denmark",
                "Sweden",
                "Norway",
                "Ireland",
                "Hungary",
                "Scotland",
                "Russia",
            ],
            color: [0xD4, 0xAF, 0x37],
            position: (52.0, 30.0),
        },
        Region {
            name: "ASIA",
            places: &[
                "China",
                "Japan",
                "Hong Kong",
                "Malaysia",
                "Singapore",
                "Thailand",
                "Korea",
                "India",
                "Nepal",
                "Bhutan",
                "Indonesia",
                "Bangladesh",
            ],
            color: [0xC7, 0x5B, 0x5B],
            position: (78.0, 45.0),
        },
        Region {
            name: "MIDDLE EAST & AFRICA",
            places: &[
                "Iran",
                "Iraq",
                "Oman",
                "Pakistan",
                "Turkey",
                "Saudi Arabia",
                "United Arab Emirates",
                "Qatar",
                "Kazakhstan",
                "Morocco",
                "Tunisia",
                "Kenya",
            ],
            color: [0x4A, 0x9E, 0x96],
            position: (55.0, 55.0),
        },
        Region {
            name: "UNITED STATES",
            places: &[
                "New York",
                "New Jersey",
                "San Francisco",
                "Los Angeles",
                "Washington",
                "Chicago",
                "Michigan",
                "Boston",
                "Miami",
                "Houston",
            ],
            color: [0x8E, 0x6B, 0xAD],
            position: (20.0, 35.0),
        },
    ];
}

pub mod attendance {
    pub const HEADING: &str = "A Snippet of Attendance Numbers in Selected Prominent Performances";

    pub const CONCERT_HALLS: [(&str, &str); 11] = [
        ("Royal Albert Hall London", "4,800"),
        ("Sydney Opera House", "2,670"),
        ("Kennedy Centre Washington DC", "2,400"),
        ("Philharmonie Paris", "2,400"),
        ("Lincoln Centre New York", "2,200"),
        ("NMACC Mumbai", "2,000"),
        ("The Barbican, London", "1,650"),
        ("King Abdulaziz Auditorium Saudi Arabia", "930"),
        ("Queen Elizabeth Hall, London", "916"),
        ("Theatre De La Ville Paris", "901"),
        ("Institute Du Monde Arabe Paris", "420"),
    ];

    pub const FESTIVALS: [(&str, &str); 7] = [
        ("NH7 Festival", "100,000"),
        ("Sydney Festival", "60,000"),
        ("WOMAD Festival UK", "40,000"),
        ("Wonderfruit", "28,000"),
        ("Kingfisher Festival", "20,000"),
        ("Fez Festival Morocco", "10,000"),
        ("RIFF Festival", "5,000"),
    ];
}

pub mod quotes {
    use std::time::Duration;

    pub const QUOTE_DURATION: Duration = Duration::from_millis(4_000);

    pub const QUOTES: [(&str, &str); 16] = [
        (
            "Impossible to sit still, so buoyant and compelling were the work's lively rhythmic currents",
            "New York Times",
        ),
        ("Rapturous, jaw dropping, compelling, tranquil", "New York Times"),
        (
            "One of the world's most mesmerising live performance experiences",
            "The Guardian London",
        ),
        ("Standing ovations again and again", "Wall Street Journal"),
        ("Enthralling and mesmerizing", "The Times of India"),
        ("Soul-touching", "The Herald Sun Melbourne"),
        ("We were all seduced!", "The Washington Post"),
        (
            "True to the nature of a dream, where one is constantly slipping in and out of consciousness",
            "The Straits Times Singapore",
        ),
        (
            "They were fantastic - if you can ever get along to see a show, I highly recommend it. \
             You'll never see anything else like it",
            "Word Press",
        ),
        (
            "Preserving the Passion of India's Roots Music at its Best",
            "New York Times",
        ),
        (
            "This is world music transcending linguistic barriers through joyous sounds and rhythm",
            "The Sydney Morning Herald",
        ),
        (
            "A mesmerizing journey through the soundscapes of Rajasthan",
            "The Guardian",
        ),
        (
            "Transcendent... a musical experience that defies boundaries",
            "The New York Times",
        ),
        ("Une célébration de la tradition musicale indienne", "Le Monde"),
        (
            "The finest ambassadors of Rajasthani folk tradition",
            "BBC Music Magazine",
        ),
        (
            "Timeless artistry meets contemporary relevance",
            "Rolling Stone India",
        ),
    ];
}

pub mod contact {
    use std::time::Duration;

    pub const BACKGROUNDS: [&str; 2] = ["/assets/Images/PAGE_13-a.jpg", "/assets/Images/PAGE_13-b.png"];
    pub const BACKGROUND_DURATION: Duration = Duration::from_millis(5_000);

    pub const HEADING: &str = "Booking Contact";
    pub const NAME: &str = "Nadja Reiche";
    pub const ROLE: &str = "Bookings";
    pub const EMAIL: &str = "nadja@caravana.world";
    pub const PHONE: &str = "+49 151 4469 4744";
    pub const CREDIT: &str = "made by unsparsh";
}
