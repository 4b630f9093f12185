//! Seed events for the activity calendar.
//!
//! The site ships with a small built-in programme that is shown until the CMS
//! provides its own. These are plain values with no side effects, usable in
//! tests and as the CLI's default event source.
//!
//! `fixtures/events.json` is not a copy of this list: it is a smaller sample
//! in the CMS export shape (offset timestamps, links) for `--events`.

use chrono::NaiveDate;

use super::types::{Event, EventCategory};

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const BEGINNERS_COURSE: NaiveDate = ymd(2026, 1, 18);
const ARTISTS_EXHIBITION: NaiveDate = ymd(2026, 1, 25);
const BERLIN_TRIP: NaiveDate = ymd(2026, 2, 15);
const INTERMEDIATE_COURSE: NaiveDate = ymd(2026, 2, 1);
const NETWORKING_EVENING: NaiveDate = ymd(2026, 1, 30);
const CLASSICAL_CONCERT: NaiveDate = ymd(2026, 3, 7);

/// Returns the built-in events of the association's programme.
///
/// # Example
///
/// ```
/// use hnds_core::calendar::seed_events;
///
/// let events = seed_events();
/// assert_eq!(events.len(), 6);
/// ```
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new(
            "tečaj-1",
            "Tečaj njemačkog - Početnici",
            BEGINNERS_COURSE,
            EventCategory::Course,
        )
        .with_title_de("Deutschkurs - Anfänger")
        .with_description(
            "Osnovna nastava njemačkog jezika za početnike. Naučite osnove gramatike, vokabulara i izgovora.",
            "Grundunterricht Deutsch für Anfänger. Lernen Sie die Grundlagen der Grammatik, des Wortschatzes und der Aussprache.",
        )
        .with_location("Split - Centar")
        .with_time("19:00 - 21:00")
        .with_capacity(20, 12),
        Event::new(
            "kulturni-1",
            "Izložba hrvatskih umjetnika",
            ARTISTS_EXHIBITION,
            EventCategory::Cultural,
        )
        .with_title_de("Ausstellung kroatischer Künstler")
        .with_description(
            "Prikaz radova lokalnih hrvatskih umjetnika: fotografija i skulptura.",
            "Wir präsentieren Werke lokaler kroatischer Künstler mit Fotografie und Skulpturen.",
        )
        .with_location("Makarska - Galerija")
        .with_time("18:00")
        .with_capacity(100, 45),
        Event::new(
            "izlet-berlin",
            "Izlet u Berlin - Kulturna tura kroz povijest",
            BERLIN_TRIP,
            EventCategory::Trip,
        )
        .with_title_de("Ausflug nach Berlin - Kulturelle Tour durch die Geschichte")
        .with_description(
            "Trodnevna tura kroz Berlin s posjetom Njemačkom povijesnom muzeju i Brandenburškim vratima.",
            "Dreitägige Tour durch Berlin mit Besuchen im Deutschen Historischen Museum und am Brandenburger Tor.",
        )
        .with_location("Berlin")
        .with_time("Cijeli dan")
        .with_capacity(30, 18),
        Event::new(
            "tečaj-2",
            "Tečaj njemačkog - Srednja razina",
            INTERMEDIATE_COURSE,
            EventCategory::Course,
        )
        .with_title_de("Deutschkurs - Mittelstufe")
        .with_description(
            "Napredna gramatika, razgovor i pismene vještine.",
            "Fortgeschrittene Grammatik, Konversation und Schreibfähigkeiten.",
        )
        .with_location("Split - Centar")
        .with_time("19:00 - 21:00")
        .with_capacity(20, 15),
        Event::new(
            "drustveni-1",
            "Društveni susret - Upoznajmo se",
            NETWORKING_EVENING,
            EventCategory::Social,
        )
        .with_title_de("Gesellschaftliches Treffen - Networking-Event")
        .with_description(
            "Neformalni susret na kojem se članovi mogu upoznati i umrežiti.",
            "Informelles Treffen, bei dem sich Mitglieder kennenlernen und vernetzen können.",
        )
        .with_location("Split - Kavana Tvrđava")
        .with_time("20:00 - 23:00")
        .with_capacity(50, 28),
        Event::new(
            "kulturni-2",
            "Koncert - Njemačka klasična glazba",
            CLASSICAL_CONCERT,
            EventCategory::Cultural,
        )
        .with_title_de("Konzert - Deutsche klassische Musik")
        .with_description(
            "Izvedba klasične njemačke glazbe s lokalnim orkestrom.",
            "Aufführung klassischer deutscher Musik mit dem lokalen Orchester.",
        )
        .with_location("Split - Narodno kazalište")
        .with_time("19:30")
        .with_capacity(300, 120),
    ]
}
