// ABOUTME: Binary FIT reader producing typed record, lap and session message streams
// ABOUTME: Absent fields stay None; decode failures surface as DecodeError for that file only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FIT Reader
//!
//! Wraps `fitparser` and keeps only the three message kinds the pipeline
//! needs. Scale and offset from the FIT profile are already applied by the
//! decoder, so values arrive in SI units (m, m/s, s, bpm, W).

/// Named field lookup with dual-field fallback
pub mod fields;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use capyrun_core::errors::DecodeError;
use capyrun_core::models::{FitActivity, LapRecord, RawRecord, SessionRecord};
use fitparser::profile::MesgNum;
use fitparser::FitDataRecord;
use tracing::{debug, info};

pub use fields::{fit_value_to_f64, MessageFields};

/// Decode a FIT file from disk
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the errors
/// of [`decode_bytes`].
pub fn read_fit_file(path: &Path) -> Result<FitActivity, DecodeError> {
    let mut file = File::open(path)?;
    read_fit(&mut file)
}

/// Decode a FIT file from any byte source
///
/// # Errors
///
/// Returns `DecodeError::Io` if the source cannot be read, otherwise the
/// errors of [`decode_bytes`].
pub fn read_fit<R: Read>(source: &mut R) -> Result<FitActivity, DecodeError> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    decode_bytes(&bytes)
}

/// Decode an in-memory FIT file
///
/// # Errors
///
/// Returns `DecodeError::Empty` for zero bytes and `DecodeError::Malformed`
/// when the container is truncated, corrupt, or fails its CRC.
pub fn decode_bytes(bytes: &[u8]) -> Result<FitActivity, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let messages =
        fitparser::from_bytes(bytes).map_err(|e| DecodeError::malformed(e.to_string()))?;

    let mut activity = FitActivity::default();
    for message in &messages {
        match message.kind() {
            MesgNum::Record => activity.records.push(raw_record(message)),
            MesgNum::Lap => activity.laps.push(lap_record(message)),
            MesgNum::Session => activity.sessions.push(session_record(message)),
            _ => {}
        }
    }
    // Stable sort keeps file order among laps without a start time, which go last
    activity
        .laps
        .sort_by_key(|lap| (lap.start_time.is_none(), lap.start_time));

    info!(
        messages = messages.len(),
        records = activity.records.len(),
        laps = activity.laps.len(),
        sessions = activity.sessions.len(),
        "Decoded FIT file"
    );
    Ok(activity)
}

fn raw_record(message: &FitDataRecord) -> RawRecord {
    let fields = MessageFields::new(message);
    RawRecord {
        timestamp: fields.timestamp("timestamp"),
        heart_rate: fields.number("heart_rate", None),
        speed: fields.number("speed", Some("enhanced_speed")),
        cadence: fields.number("cadence", None),
        power: fields.number("power", None),
        altitude: fields.number("altitude", Some("enhanced_altitude")),
        distance: fields.number("distance", None),
    }
}

fn lap_record(message: &FitDataRecord) -> LapRecord {
    let fields = MessageFields::new(message);
    LapRecord {
        start_time: fields.timestamp("start_time"),
        total_distance_m: fields.number("total_distance", None),
        total_time_s: fields.number("total_timer_time", Some("total_elapsed_time")),
        avg_hr: fields.number("avg_heart_rate", None),
        max_hr: fields.number("max_heart_rate", None),
        avg_speed: fields.number("avg_speed", Some("enhanced_avg_speed")),
        max_speed: fields.number("max_speed", Some("enhanced_max_speed")),
        avg_cadence: fields.number("avg_cadence", None),
        ascent_m: fields.number("total_ascent", None),
        descent_m: fields.number("total_descent", None),
        trigger_kind: fields.label("lap_trigger"),
    }
}

fn session_record(message: &FitDataRecord) -> SessionRecord {
    let fields = MessageFields::new(message);
    let session = SessionRecord {
        start_time: fields.timestamp("start_time"),
        sport: fields.label("sport"),
        sub_sport: fields.label("sub_sport"),
        total_distance_m: fields.number("total_distance", None),
        total_elapsed_time_s: fields.number("total_elapsed_time", None),
        total_timer_time_s: fields.number("total_timer_time", None),
        avg_hr: fields.number("avg_heart_rate", None),
        max_hr: fields.number("max_heart_rate", None),
        avg_speed: fields.number("avg_speed", Some("enhanced_avg_speed")),
        max_speed: fields.number("max_speed", Some("enhanced_max_speed")),
        avg_cadence: fields.number("avg_cadence", None),
        ascent_m: fields.number("total_ascent", None),
        descent_m: fields.number("total_descent", None),
        avg_power: fields.number("avg_power", None),
        max_power: fields.number("max_power", None),
        calories: fields.number("total_calories", None),
    };
    debug!(sport = ?session.sport, start = ?session.start_time, "Session message");
    session
}
