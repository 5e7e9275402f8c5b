// transit.rs
use crate::errors::PipelineError;
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

/// One stop from the static transit-stop table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitStop {
    pub network: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// Reads a headered CSV whose first three columns are
/// network-type code, Y (latitude) and X (longitude), in WGS84 degrees.
/// Header names are not checked; columns are taken by position.
///
/// `networks` limits which codes are kept. Empty keeps all.
pub fn read_transit_stops(path: &Path, networks: &[u32]) -> Result<Vec<TransitStop>, PipelineError> {
    let file = std::fs::File::open(path)
        .map_err(|e| PipelineError::Io(format!("cannot open {}: {e}", path.display())))?;
    parse_transit_stops(file, networks)
}

pub fn parse_transit_stops<R: Read>(
    reader: R,
    networks: &[u32],
) -> Result<Vec<TransitStop>, PipelineError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut stops = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| PipelineError::Io(format!("transit stops: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let bad = |name: &str, value: &str| {
            PipelineError::Io(format!("transit stops line {line}: bad {name} '{value}'"))
        };

        let network = column(&record, 0, "network code", line)?;
        let y = column(&record, 1, "Y coordinate", line)?;
        let x = column(&record, 2, "X coordinate", line)?;

        let stop = TransitStop {
            network: network.parse().map_err(|_| bad("network code", network))?,
            latitude: y.parse().map_err(|_| bad("Y coordinate", y))?,
            longitude: x.parse().map_err(|_| bad("X coordinate", x))?,
        };

        if networks.is_empty() || networks.contains(&stop.network) {
            stops.push(stop);
        }
    }

    tracing::debug!(count = stops.len(), "transit stops loaded");
    Ok(stops)
}

fn column<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &str,
    line: u64,
) -> Result<&'r str, PipelineError> {
    record
        .get(index)
        .ok_or_else(|| PipelineError::Io(format!("transit stops line {line}: no {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
VERKKO,Y,X
1,60.1699,24.9384
2,60.1718,24.9414
4,60.1989,24.9335
";

    #[test]
    fn reads_columns_by_position() {
        let stops = parse_transit_stops(CSV.as_bytes(), &[]).unwrap();

        assert_eq!(stops.len(), 3);
        assert_eq!(
            stops[1],
            TransitStop {
                network: 2,
                latitude: 60.1718,
                longitude: 24.9414
            }
        );
    }

    #[test]
    fn filters_by_network_code() {
        let stops = parse_transit_stops(CSV.as_bytes(), &[4]).unwrap();

        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].network, 4);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "VERKKO,Y,X,NIMI\n1, 60.1 , 24.9 ,Rautatientori\n";
        let stops = parse_transit_stops(csv.as_bytes(), &[]).unwrap();
        assert_eq!(stops[0].latitude, 60.1);
    }

    #[test]
    fn malformed_row_names_the_line() {
        let csv = "VERKKO,Y,X\n1,60.1,24.9\nbus,60.2,24.8\n";

        match parse_transit_stops(csv.as_bytes(), &[]) {
            Err(PipelineError::Io(msg)) => {
                assert!(msg.contains("line 3"), "{msg}");
                assert!(msg.contains("network code"), "{msg}");
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_rejected() {
        let csv = "VERKKO,Y,X\n1,60.1\n";
        assert!(parse_transit_stops(csv.as_bytes(), &[]).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_transit_stops(Path::new("/nonexistent/stops.csv"), &[]).unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}
