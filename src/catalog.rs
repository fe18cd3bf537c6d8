//! Static trip catalog shown on the landing page.

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
const RESERVATION_URL: &str = "https://wa.me/6281234567890?text=";

#[derive(Clone, Debug, PartialEq)]
pub struct TripEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub photo: String,
    pub price: String,
    pub location: String,
    pub maps_url: String,
    pub website_url: String,
    pub reservation_url: String,
}

impl TripEntry {
    pub fn has_website(&self) -> bool {
        !self.website_url.trim().is_empty()
    }
}

struct TripDefinition {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    photo: &'static str,
    price: &'static str,
    location: &'static str,
    website: Option<&'static str>,
}

const TRIPS: &[TripDefinition] = &[
    TripDefinition {
        id: "bromo",
        title: "Open Trip Bromo Sunrise",
        description: "Berangkat tengah malam dari Malang, menikmati matahari terbit di Penanjakan, lalu menyusuri lautan pasir dan kawah Bromo dengan jeep.",
        photo: "/assets/trips/bromo.jpg",
        price: "Rp 350.000 / orang",
        location: "Gunung Bromo, Jawa Timur",
        website: Some("/trips/bromo.html"),
    },
    TripDefinition {
        id: "labuan-bajo",
        title: "Sailing Komodo 3D2N",
        description: "Live on board menjelajah Pulau Padar, Pink Beach, Pulau Komodo dan snorkeling di Manta Point.",
        photo: "/assets/trips/labuan-bajo.jpg",
        price: "Rp 2.750.000 / orang",
        location: "Labuan Bajo, Nusa Tenggara Timur",
        website: Some("/trips/labuan-bajo.html"),
    },
    TripDefinition {
        id: "raja-ampat",
        title: "Raja Ampat Explorer",
        description: "Empat hari menyelami gugusan karst Piaynemo, Telaga Bintang dan desa wisata Arborek.",
        photo: "/assets/trips/raja-ampat.jpg",
        price: "Rp 6.900.000 / orang",
        location: "Raja Ampat, Papua Barat Daya",
        website: Some("/trips/raja-ampat.html"),
    },
    TripDefinition {
        id: "dieng",
        title: "Dieng Culture Trip",
        description: "Telaga Warna, Kawah Sikidang, Candi Arjuna dan sunrise di Bukit Sikunir dalam satu akhir pekan.",
        photo: "/assets/trips/dieng.jpg",
        price: "Rp 450.000 / orang",
        location: "Dataran Tinggi Dieng, Jawa Tengah",
        website: None,
    },
];

fn maps_url(location: &str) -> String {
    format!("{}{}", MAPS_SEARCH_URL, urlencoding::encode(location))
}

fn reservation_url(title: &str) -> String {
    let text = format!("Halo, saya mau reservasi {}", title);
    format!("{}{}", RESERVATION_URL, urlencoding::encode(&text))
}

impl From<&TripDefinition> for TripEntry {
    fn from(def: &TripDefinition) -> Self {
        TripEntry {
            id: def.id.to_string(),
            title: def.title.to_string(),
            description: def.description.to_string(),
            photo: def.photo.to_string(),
            price: def.price.to_string(),
            location: def.location.to_string(),
            maps_url: maps_url(def.location),
            website_url: def.website.unwrap_or_default().to_string(),
            reservation_url: reservation_url(def.title),
        }
    }
}

/// Read-only lookup over the trips offered on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogService {
    entries: Vec<TripEntry>,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::from_entries(TRIPS.iter().map(TripEntry::from).collect())
    }

    pub fn from_entries(entries: Vec<TripEntry>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, id: &str) -> Option<&TripEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[TripEntry] {
        &self.entries
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new()
    }
}
