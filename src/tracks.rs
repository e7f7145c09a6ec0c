//! Static track presentation metadata.
//!
//! Compiled-in lookup tables mapping a track name to its circuit image
//! reference and a short list of facts shown next to the charts.
//! Keying is case-sensitive and exact-match; an unknown track falls
//! back to a placeholder image and an empty fact list rather than
//! failing.

/// Image served when the requested track is not in the table.
pub const DEFAULT_CIRCUIT_IMAGE: &str = "/default_circuit.png";

/// (track name, circuit image, facts) for every track we ship assets for.
const TRACKS: &[(&str, &str, &[&str])] = &[
    (
        "Bahrain",
        "/Bahrain_Circuit.avif",
        &[
            "Bahrain hosted the first F1 race in the Middle East in 2004.",
            "It is known for its desert backdrop and night races.",
            "The track features a 1 km straight, ideal for overtaking.",
        ],
    ),
    (
        "Monaco",
        "/Monaco_Circuit.avif",
        &[
            "The Monaco Grand Prix is one of the most prestigious races in F1.",
            "It is known for its narrow streets and sharp corners.",
            "Qualifying is crucial due to limited overtaking opportunities.",
        ],
    ),
    (
        "Silverstone",
        "/Silverstone_Circuit.avif",
        &[
            "Silverstone hosted the first F1 World Championship race in 1950.",
            "The circuit is one of the fastest tracks on the calendar.",
            "Famous corners include Maggotts, Becketts, and Chapel.",
        ],
    ),
    (
        "Singapore",
        "/Singapore_Circuit.avif",
        &[
            "The Singapore Grand Prix was the first night race in F1 history.",
            "The Marina Bay Street Circuit is known for its cityscape views.",
            "It has 23 corners, making it one of the most technical tracks.",
        ],
    ),
    (
        "Qatar",
        "/Qatar_Circuit.avif",
        &[
            "The Qatar Grand Prix debuted in 2021 at the Losail International Circuit.",
            "It is known for its flowing layout and floodlit races.",
            "The circuit features long straights and high-speed corners.",
        ],
    ),
    (
        "Canada",
        "/Canada_Circuit.avif",
        &[
            "The Circuit Gilles Villeneuve is named after the legendary driver Gilles Villeneuve.",
            "The track is famous for the 'Wall of Champions.'",
            "It is known for its high-speed straights and tight corners.",
        ],
    ),
    (
        "Abu_Dhabi",
        "/Abu_Dhabi_Circuit.avif",
        &[
            "The Yas Marina Circuit hosts the final race of the F1 season.",
            "The track features a unique pit exit that passes under the circuit.",
            "It offers stunning sunset views during the race.",
        ],
    ),
];

/// Circuit image reference for a track, or the placeholder if unknown.
pub fn circuit_image(track: &str) -> &'static str {
    TRACKS
        .iter()
        .find(|(name, _, _)| *name == track)
        .map(|(_, image, _)| *image)
        .unwrap_or(DEFAULT_CIRCUIT_IMAGE)
}

/// Facts for a track, empty if unknown.
pub fn fun_facts(track: &str) -> &'static [&'static str] {
    TRACKS
        .iter()
        .find(|(name, _, _)| *name == track)
        .map(|(_, _, facts)| *facts)
        .unwrap_or(&[])
}

/// All track names with shipped assets, in display order.
pub fn available_tracks() -> impl Iterator<Item = &'static str> {
    TRACKS.iter().map(|(name, _, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_track_resolves_image_and_facts() {
        assert_eq!(circuit_image("Monaco"), "/Monaco_Circuit.avif");
        assert_eq!(fun_facts("Monaco").len(), 3);
    }

    #[test]
    fn unknown_track_falls_back_to_placeholder() {
        assert_eq!(circuit_image("Imola"), DEFAULT_CIRCUIT_IMAGE);
        assert!(fun_facts("Imola").is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(circuit_image("monaco"), DEFAULT_CIRCUIT_IMAGE);
        assert!(fun_facts("BAHRAIN").is_empty());
    }

    #[test]
    fn every_track_has_image_and_facts() {
        for name in available_tracks() {
            assert!(circuit_image(name).starts_with('/'));
            assert!(!fun_facts(name).is_empty());
        }
    }
}
