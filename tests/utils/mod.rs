use chrono::NaiveDateTime;
use sounding_prep::RawSounding;
use std::{fs::File, io::Read, path::PathBuf, str::FromStr};

pub fn load_test_file(fname: &str) -> RawSounding {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push(fname);
    load_csv_record(&test_path)
}

fn load_csv_record(location: &PathBuf) -> RawSounding {
    let mut f = File::open(location).unwrap_or_else(|_| panic!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .unwrap_or_else(|_| panic!("Error reading file: {:#?}", location));

    let mut raw = RawSounding::default();

    let lines: Vec<&str> = contents.split('\n').collect();
    let mut line_iter = lines.iter();

    //
    // Parse profile data
    //
    for line in line_iter.by_ref() {
        if line.starts_with("### Profile Data ###") {
            break;
        }
    }

    // Skip the column name line.
    line_iter.next();

    for line in line_iter.by_ref() {
        if line.starts_with("### Station Data ###") {
            break;
        }

        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 6 {
            continue;
        }

        raw.pressure.push(f64::from_str(tokens[0].trim()).ok().into());
        raw.height.push(f64::from_str(tokens[1].trim()).ok().into());
        raw.temperature
            .push(f64::from_str(tokens[2].trim()).ok().into());
        raw.dew_point
            .push(f64::from_str(tokens[3].trim()).ok().into());
        raw.direction
            .push(f64::from_str(tokens[4].trim()).ok().into());
        raw.speed.push(f64::from_str(tokens[5].trim()).ok().into());
    }

    //
    // Parse station data
    //
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;

    for line in line_iter {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() < 2 {
            continue;
        }

        let key = tokens[0].trim();
        let value = tokens[1].trim();

        match key {
            "station id" => raw.station_id = Some(value.to_owned()),
            "station number" => raw.station_num = i32::from_str(value).ok().into(),
            "latitude" => latitude = f64::from_str(value).ok(),
            "longitude" => longitude = f64::from_str(value).ok(),
            "elevation" => raw.elevation = f64::from_str(value).ok().into(),
            "precipitable water" => raw.precipitable_water = f64::from_str(value).ok().into(),
            "valid time" => {
                raw.valid_time = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").ok()
            }
            _ => panic!("Unknown key in test file: {}", key),
        }
    }

    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        raw.location = Some((lat, lon));
    }

    raw
}
