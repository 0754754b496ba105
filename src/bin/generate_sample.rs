use encoding_rs::mem::encode_latin1_lossy;

// ---------------------------------------------------------------------------
// Sample dataset generator
// ---------------------------------------------------------------------------
//
// Writes a small ISO-8859-1 encoded roster to the dashboard's default input
// file. Names and clubs deliberately carry Latin-1 diacritics so the
// accent-folding and encoding paths get exercised on real-looking data.

const HEADER: [&str; 8] = [
    "Name",
    "Position_Cluster_fifa",
    "Club_fifa",
    "Age_fifa",
    "market_value_in_eur",
    "predicted_market_value",
    "Nationality_fifa",
    "Overall_fifa",
];

struct SamplePlayer {
    name: &'static str,
    position: &'static str,
    club: &'static str,
    age: i64,
    market_value: f64,
    predicted_value: f64,
    nationality: &'static str,
    overall: i64,
}

const ROSTER: &[SamplePlayer] = &[
    SamplePlayer {
        name: "Thibaut Courtois",
        position: "GK",
        club: "Real Madrid CF",
        age: 31,
        market_value: 25_000_000.0,
        predicted_value: 24_100_000.5,
        nationality: "Belgium",
        overall: 89,
    },
    SamplePlayer {
        name: "Gregor Kobel",
        position: "GK",
        club: "Borussia Dortmund",
        age: 25,
        market_value: 35_000_000.0,
        predicted_value: 36_250_000.0,
        nationality: "Switzerland",
        overall: 87,
    },
    SamplePlayer {
        name: "Unai Sim\u{f3}n",
        position: "GK",
        club: "Athletic Club",
        age: 26,
        market_value: 25_000_000.0,
        predicted_value: 26_100_000.0,
        nationality: "Spain",
        overall: 84,
    },
    SamplePlayer {
        name: "Jos\u{e9} Mar\u{ed}a Gim\u{e9}nez",
        position: "DEF",
        club: "Atl\u{e9}tico de Madrid",
        age: 28,
        market_value: 40_000_000.0,
        predicted_value: 38_500_000.25,
        nationality: "Uruguay",
        overall: 86,
    },
    SamplePlayer {
        name: "R\u{fa}ben Dias",
        position: "DEF",
        club: "Manchester City",
        age: 26,
        market_value: 75_000_000.0,
        predicted_value: 78_900_000.0,
        nationality: "Portugal",
        overall: 88,
    },
    SamplePlayer {
        name: "Niklas S\u{fc}le",
        position: "DEF",
        club: "Borussia Dortmund",
        age: 27,
        market_value: 30_000_000.0,
        predicted_value: 28_750_000.0,
        nationality: "Germany",
        overall: 84,
    },
    SamplePlayer {
        name: "Rapha\u{eb}l Varane",
        position: "DEF",
        club: "Manchester United",
        age: 30,
        market_value: 32_000_000.0,
        predicted_value: 29_800_000.75,
        nationality: "France",
        overall: 85,
    },
    SamplePlayer {
        name: "Achraf Hakimi",
        position: "DEF",
        club: "Paris Saint-Germain",
        age: 24,
        market_value: 65_000_000.0,
        predicted_value: 67_200_000.0,
        nationality: "Morocco",
        overall: 85,
    },
    SamplePlayer {
        name: "\u{c9}der Milit\u{e3}o",
        position: "DEF",
        club: "Real Madrid CF",
        age: 25,
        market_value: 60_000_000.0,
        predicted_value: 62_800_000.5,
        nationality: "Brazil",
        overall: 86,
    },
    SamplePlayer {
        name: "Martin \u{d8}degaard",
        position: "MID",
        club: "Arsenal FC",
        age: 24,
        market_value: 90_000_000.0,
        predicted_value: 94_500_000.0,
        nationality: "Norway",
        overall: 88,
    },
    SamplePlayer {
        name: "Rodri Hern\u{e1}ndez",
        position: "MID",
        club: "Manchester City",
        age: 27,
        market_value: 110_000_000.0,
        predicted_value: 115_800_000.5,
        nationality: "Spain",
        overall: 90,
    },
    SamplePlayer {
        name: "\u{c9}mile Smith Rowe",
        position: "MID",
        club: "Arsenal FC",
        age: 23,
        market_value: 27_000_000.0,
        predicted_value: 25_400_000.0,
        nationality: "England",
        overall: 80,
    },
    SamplePlayer {
        name: "Florian Wirtz",
        position: "MID",
        club: "Bayer 04 Leverkusen",
        age: 20,
        market_value: 85_000_000.0,
        predicted_value: 96_700_000.0,
        nationality: "Germany",
        overall: 86,
    },
    SamplePlayer {
        name: "Frenkie de Jong",
        position: "MID",
        club: "FC Barcelona",
        age: 26,
        market_value: 80_000_000.0,
        predicted_value: 76_300_000.0,
        nationality: "Netherlands",
        overall: 87,
    },
    SamplePlayer {
        name: "Kylian Mbapp\u{e9}",
        position: "FWD",
        club: "Real Madrid CF",
        age: 24,
        market_value: 180_000_000.0,
        predicted_value: 192_300_000.0,
        nationality: "France",
        overall: 91,
    },
    SamplePlayer {
        name: "Viktor Gy\u{f6}keres",
        position: "FWD",
        club: "Sporting CP",
        age: 25,
        market_value: 55_000_000.0,
        predicted_value: 68_400_000.5,
        nationality: "Sweden",
        overall: 84,
    },
    SamplePlayer {
        name: "Jo\u{e3}o F\u{e9}lix",
        position: "FWD",
        club: "Atl\u{e9}tico de Madrid",
        age: 23,
        market_value: 50_000_000.0,
        predicted_value: 44_250_000.0,
        nationality: "Portugal",
        overall: 84,
    },
    SamplePlayer {
        name: "Alexander S\u{f8}rloth",
        position: "FWD",
        club: "Villarreal CF",
        age: 27,
        market_value: 15_000_000.0,
        predicted_value: 17_800_000.0,
        nationality: "Norway",
        overall: 82,
    },
    SamplePlayer {
        name: "Ansu Fati",
        position: "FWD",
        club: "FC Barcelona",
        age: 20,
        market_value: 30_000_000.0,
        predicted_value: 24_500_000.25,
        nationality: "Spain",
        overall: 81,
    },
    SamplePlayer {
        name: "Ousmane Demb\u{e9}l\u{e9}",
        position: "FWD",
        club: "Paris Saint-Germain",
        age: 26,
        market_value: 50_000_000.0,
        predicted_value: 48_900_000.5,
        nationality: "France",
        overall: 86,
    },
    SamplePlayer {
        name: "Rasmus H\u{f8}jlund",
        position: "FWD",
        club: "Manchester United",
        age: 20,
        market_value: 65_000_000.0,
        predicted_value: 58_700_000.75,
        nationality: "Denmark",
        overall: 79,
    },
];

fn latin1(text: &str) -> Vec<u8> {
    encode_latin1_lossy(text).into_owned()
}

/// The complete file content, assembled in memory.
fn roster_csv_bytes() -> Vec<u8> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER.iter().map(|h| latin1(h)))
        .expect("Failed to write header");

    for player in ROSTER {
        writer
            .write_record([
                latin1(player.name),
                latin1(player.position),
                latin1(player.club),
                latin1(&player.age.to_string()),
                latin1(&player.market_value.to_string()),
                latin1(&player.predicted_value.to_string()),
                latin1(player.nationality),
                latin1(&player.overall.to_string()),
            ])
            .expect("Failed to write player row");
    }
    writer.into_inner().expect("Failed to flush sample rows")
}

fn main() {
    let path = "final_predictions_by_position.csv";
    std::fs::write(path, roster_csv_bytes()).expect("Failed to create output file");

    println!("Wrote {} players to {path}", ROSTER.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_is_valid_latin1_csv_with_the_required_columns() {
        let bytes = roster_csv_bytes();
        // `é` in "José" must be the single Latin-1 byte, never the UTF-8 pair.
        assert!(bytes.contains(&0xE9));
        assert!(!bytes.windows(2).any(|w| w == [0xC3, 0xA9]));

        // Byte records: the payload is Latin-1, not UTF-8.
        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.byte_headers().expect("readable header").clone();
        for required in [
            "Name",
            "Position_Cluster_fifa",
            "Club_fifa",
            "Age_fifa",
            "market_value_in_eur",
            "predicted_market_value",
        ] {
            assert!(
                headers.iter().any(|h| h == required.as_bytes()),
                "missing column {required}"
            );
        }

        let rows: Vec<_> = reader
            .byte_records()
            .map(|r| r.expect("readable row"))
            .collect();
        assert_eq!(rows.len(), ROSTER.len());
        assert!(rows.iter().all(|r| r.len() == HEADER.len()));
    }

    #[test]
    fn roster_covers_every_position_cluster() {
        for cluster in ["GK", "DEF", "MID", "FWD"] {
            assert!(
                ROSTER.iter().any(|p| p.position == cluster),
                "no {cluster} in the sample"
            );
        }
    }
}
