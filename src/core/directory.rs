// static hospital, doctor and service data with search/filter
// everything here is fabricated demo data for kanpur, built once and read-only

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Hospital {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    pub distance_km: f32,
    pub kind: &'static str,
    pub icu_available: u32,
    pub ventilators: u32,
    pub rating: f32,
    pub open_hours: &'static str,
    pub emergency: bool,
    pub specialties: &'static [&'static str],
    pub doctors: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub reviews: u32,
    pub availability: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub fee: u64,
    pub payment_methods: &'static [&'static str],
    pub bio: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub price_per_day: u64,
    pub available: u32,
}

/// Tabular view of a search result, for table output and json mode.
#[derive(Serialize)]
pub struct Listing {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
    pub row_count: usize,
}

#[derive(Debug, Default, Clone)]
pub struct HospitalFilter {
    /// case-insensitive substring over name or location
    pub search: Option<String>,
    /// exact specialty membership
    pub specialty: Option<String>,
    pub emergency_only: bool,
}

#[derive(Debug, Default, Clone)]
pub struct DoctorFilter {
    /// case-insensitive substring over name
    pub search: Option<String>,
    /// exact specialty match
    pub specialty: Option<String>,
}

pub struct Directory {
    hospitals: Vec<Hospital>,
    doctors: Vec<Doctor>,
    services: Vec<Service>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            hospitals: hospitals(),
            doctors: doctors(),
            services: services(),
        }
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn hospital(&self, id: u32) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    pub fn doctor(&self, id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn service(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    // all criteria are and-ed; an empty filter returns everything
    pub fn search_hospitals(&self, filter: &HospitalFilter) -> Vec<&Hospital> {
        let term = filter.search.as_deref().map(str::to_lowercase);

        self.hospitals
            .iter()
            .filter(|h| {
                let matches_search = term.as_deref().is_none_or(|t| {
                    h.name.to_lowercase().contains(t) || h.location.to_lowercase().contains(t)
                });
                let matches_emergency = !filter.emergency_only || h.emergency;
                let matches_specialty = filter
                    .specialty
                    .as_deref()
                    .is_none_or(|s| h.specialties.contains(&s));

                matches_search && matches_emergency && matches_specialty
            })
            .collect()
    }

    pub fn search_doctors(&self, filter: &DoctorFilter) -> Vec<&Doctor> {
        let term = filter.search.as_deref().map(str::to_lowercase);

        self.doctors
            .iter()
            .filter(|d| {
                let matches_search =
                    term.as_deref().is_none_or(|t| d.name.to_lowercase().contains(t));
                let matches_specialty =
                    filter.specialty.as_deref().is_none_or(|s| d.specialty == s);

                matches_search && matches_specialty
            })
            .collect()
    }

    pub const SPECIALTIES: &'static [&'static str] = &[
        "Cardiology",
        "Neurology",
        "Orthopedics",
        "Oncology",
        "Gastroenterology",
        "General Surgery",
        "Gynecology",
        "Pediatrics",
        "ENT",
        "Urology",
        "Nephrology",
        "Internal Medicine",
        "Dermatology",
        "Psychiatry",
        "Obstetrics",
    ];
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Listing {
    pub fn from_hospitals(hospitals: &[&Hospital]) -> Self {
        let columns = ["name", "location", "type", "icu", "vents", "rating", "hours"]
            .map(String::from)
            .to_vec();
        let rows = hospitals
            .iter()
            .map(|h| {
                vec![
                    h.name.into(),
                    h.location.into(),
                    h.kind.into(),
                    h.icu_available.into(),
                    h.ventilators.into(),
                    h.rating.into(),
                    h.open_hours.into(),
                ]
            })
            .collect::<Vec<Vec<serde_json::Value>>>();
        let row_count = rows.len();

        Self {
            columns,
            rows,
            row_count,
        }
    }

    pub fn from_doctors(doctors: &[&Doctor]) -> Self {
        let columns = ["name", "specialty", "rating", "availability", "fee"]
            .map(String::from)
            .to_vec();
        let rows = doctors
            .iter()
            .map(|d| {
                vec![
                    d.name.into(),
                    d.specialty.into(),
                    d.rating.into(),
                    d.availability.into(),
                    format!("\u{20b9}{}", d.fee).into(),
                ]
            })
            .collect::<Vec<Vec<serde_json::Value>>>();
        let row_count = rows.len();

        Self {
            columns,
            rows,
            row_count,
        }
    }

    pub fn from_services(services: &[Service]) -> Self {
        let columns = ["service", "description", "price/day", "available"]
            .map(String::from)
            .to_vec();
        let rows = services
            .iter()
            .map(|s| {
                vec![
                    s.title.into(),
                    s.description.into(),
                    format!("\u{20b9}{}", s.price_per_day).into(),
                    s.available.into(),
                ]
            })
            .collect::<Vec<Vec<serde_json::Value>>>();
        let row_count = rows.len();

        Self {
            columns,
            rows,
            row_count,
        }
    }
}

fn hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            id: 1,
            name: "Regency Healthcare",
            location: "Mall Road, Kanpur",
            distance_km: 2.1,
            kind: "Multi-Specialty",
            icu_available: 15,
            ventilators: 12,
            rating: 4.8,
            open_hours: "24/7",
            emergency: true,
            specialties: &[
                "Cardiology",
                "Neurology",
                "Orthopedics",
                "Oncology",
                "Gastroenterology",
            ],
            doctors: 50,
        },
        Hospital {
            id: 2,
            name: "Laxmi Hospital",
            location: "Civil Lines, Kanpur",
            distance_km: 3.5,
            kind: "Multi-Specialty",
            icu_available: 10,
            ventilators: 8,
            rating: 4.6,
            open_hours: "24/7",
            emergency: true,
            specialties: &["General Surgery", "Gynecology", "Pediatrics", "ENT"],
            doctors: 35,
        },
        Hospital {
            id: 3,
            name: "Kanpur Medical Center",
            location: "Kidwai Nagar, Kanpur",
            distance_km: 4.2,
            kind: "Super Specialty",
            icu_available: 20,
            ventilators: 15,
            rating: 4.9,
            open_hours: "24/7",
            emergency: true,
            specialties: &[
                "Cardiology",
                "Neurosurgery",
                "Orthopedics",
                "Urology",
                "Nephrology",
            ],
            doctors: 60,
        },
        Hospital {
            id: 4,
            name: "Rama Medical College Hospital",
            location: "Mandhana, Kanpur",
            distance_km: 12.5,
            kind: "Teaching Hospital",
            icu_available: 25,
            ventilators: 20,
            rating: 4.7,
            open_hours: "24/7",
            emergency: true,
            specialties: &[
                "General Medicine",
                "Surgery",
                "Obstetrics",
                "Pediatrics",
                "Psychiatry",
            ],
            doctors: 80,
        },
        Hospital {
            id: 5,
            name: "Madhuraj Hospital",
            location: "Kakadeo, Kanpur",
            distance_km: 5.8,
            kind: "Multi-Specialty",
            icu_available: 12,
            ventilators: 8,
            rating: 4.5,
            open_hours: "24/7",
            emergency: true,
            specialties: &["Internal Medicine", "Orthopedics", "ENT", "Dermatology"],
            doctors: 30,
        },
    ]
}

fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "Dr. Rajesh Sharma",
            specialty: "Cardiologist",
            rating: 4.9,
            reviews: 125,
            availability: "Mon-Fri, 9am-5pm",
            phone: "+91 9876543210",
            address: "123, Main Road, Kanpur",
            fee: 800,
            payment_methods: &["Card", "UPI", "Net Banking"],
            bio: "Dr. Sharma is a leading cardiologist with 20 years of experience.",
        },
        Doctor {
            id: 2,
            name: "Dr. Priya Verma",
            specialty: "Gynecologist",
            rating: 4.7,
            reviews: 98,
            availability: "Tue-Sat, 10am-6pm",
            phone: "+91 9988776655",
            address: "456, Civil Lines, Kanpur",
            fee: 700,
            payment_methods: &["Card", "Cash"],
            bio: "Dr. Verma is an experienced gynecologist specializing in women healthcare.",
        },
        Doctor {
            id: 3,
            name: "Dr. Arvind Patel",
            specialty: "Orthopedist",
            rating: 4.6,
            reviews: 76,
            availability: "Mon-Sat, 11am-7pm",
            phone: "+91 8877665544",
            address: "789, Swaroop Nagar, Kanpur",
            fee: 900,
            payment_methods: &["UPI", "Net Banking"],
            bio: "Dr. Patel is a renowned orthopedist specializing in joint replacements.",
        },
        Doctor {
            id: 4,
            name: "Dr. Meera Singh",
            specialty: "Pediatrician",
            rating: 4.8,
            reviews: 110,
            availability: "Mon-Fri, 10am-2pm, 4pm-6pm",
            phone: "+91 7766554433",
            address: "101, Arya Nagar, Kanpur",
            fee: 600,
            payment_methods: &["Card", "UPI", "Cash"],
            bio: "Dr. Singh is a dedicated pediatrician providing care for infants and children.",
        },
        Doctor {
            id: 5,
            name: "Dr. Rohan Gupta",
            specialty: "Neurologist",
            rating: 4.5,
            reviews: 65,
            availability: "Tue-Sat, 9am-5pm",
            phone: "+91 7788990011",
            address: "222, Kakadeo, Kanpur",
            fee: 1000,
            payment_methods: &["Card", "Net Banking"],
            bio: "Dr. Gupta is a leading neurologist specializing in nervous system disorders.",
        },
    ]
}

fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            title: "ICU Beds",
            description: "Fully equipped intensive care units with monitoring",
            price_per_day: 15000,
            available: 8,
        },
        Service {
            id: 2,
            title: "Ventilators",
            description: "Advanced respiratory support systems",
            price_per_day: 8000,
            available: 12,
        },
        Service {
            id: 3,
            title: "Private Rooms",
            description: "Comfortable private rooms with amenities",
            price_per_day: 5000,
            available: 20,
        },
        Service {
            id: 4,
            title: "Semi-Private Rooms",
            description: "Shared rooms with privacy partitions",
            price_per_day: 3000,
            available: 15,
        },
        Service {
            id: 5,
            title: "Deluxe Suites",
            description: "Premium suites with enhanced comfort",
            price_per_day: 12000,
            available: 5,
        },
        Service {
            id: 6,
            title: "Emergency Resources",
            description: "Priority access to emergency medical equipment",
            price_per_day: 10000,
            available: 10,
        },
    ]
}
