// tests for directory search and filters

use medibud::{Directory, DoctorFilter, HospitalFilter};

#[test]
fn test_empty_filter_returns_all() {
    let directory = Directory::new();
    let all = directory.search_hospitals(&HospitalFilter::default());
    assert_eq!(all.len(), directory.hospitals().len());
}

#[test]
fn test_search_by_name_substring() {
    let directory = Directory::new();
    let filter = HospitalFilter {
        search: Some("regency".to_string()),
        ..Default::default()
    };
    let found = directory.search_hospitals(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Regency Healthcare");
}

#[test]
fn test_search_matches_location_too() {
    let directory = Directory::new();
    let filter = HospitalFilter {
        search: Some("civil lines".to_string()),
        ..Default::default()
    };
    let found = directory.search_hospitals(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Laxmi Hospital");
}

#[test]
fn test_specialty_filter_is_exact_membership() {
    let directory = Directory::new();
    let filter = HospitalFilter {
        specialty: Some("Cardiology".to_string()),
        ..Default::default()
    };
    let found = directory.search_hospitals(&filter);
    assert_eq!(found.len(), 2);
    for h in &found {
        assert!(h.specialties.contains(&"Cardiology"));
    }
}

#[test]
fn test_unknown_specialty_matches_nothing() {
    let directory = Directory::new();
    let filter = HospitalFilter {
        specialty: Some("Astrology".to_string()),
        ..Default::default()
    };
    assert!(directory.search_hospitals(&filter).is_empty());
}

#[test]
fn test_filters_combine_with_and() {
    let directory = Directory::new();
    let filter = HospitalFilter {
        search: Some("kanpur".to_string()),
        specialty: Some("Orthopedics".to_string()),
        emergency_only: true,
    };
    let found = directory.search_hospitals(&filter);
    assert!(!found.is_empty());
    for h in &found {
        assert!(h.emergency);
        assert!(h.specialties.contains(&"Orthopedics"));
        assert!(h.location.to_lowercase().contains("kanpur"));
    }
}

#[test]
fn test_doctor_search_by_name() {
    let directory = Directory::new();
    let filter = DoctorFilter {
        search: Some("sharma".to_string()),
        specialty: None,
    };
    let found = directory.search_doctors(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].specialty, "Cardiologist");
}

#[test]
fn test_doctor_specialty_is_exact() {
    let directory = Directory::new();
    let filter = DoctorFilter {
        search: None,
        specialty: Some("Pediatrician".to_string()),
    };
    let found = directory.search_doctors(&filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Dr. Meera Singh");
}

#[test]
fn test_lookup_by_id() {
    let directory = Directory::new();
    assert!(directory.hospital(1).is_some());
    assert!(directory.doctor(5).is_some());
    assert!(directory.service(6).is_some());
    assert!(directory.service(999).is_none());
}
