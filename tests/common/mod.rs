// ABOUTME: Shared test utilities that encode synthetic FIT activity files in memory
// ABOUTME: Writes header, definition and data messages with valid header and file CRCs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
//! Synthetic FIT files for integration tests
//!
//! Every message is written with its own definition on local type 0, which
//! is valid FIT and keeps the encoder trivial.

use std::sync::Once;

use chrono::{DateTime, Duration, TimeZone, Utc};

static INIT_LOGGER: Once = Once::new();

/// Install a quiet subscriber once per test process
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Seconds between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z)
const FIT_EPOCH_OFFSET: i64 = 631_065_600;

const GLOBAL_FILE_ID: u16 = 0;
const GLOBAL_SESSION: u16 = 18;
const GLOBAL_LAP: u16 = 19;
const GLOBAL_RECORD: u16 = 20;

const BASE_ENUM: u8 = 0x00;
const BASE_UINT8: u8 = 0x02;
const BASE_UINT16: u8 = 0x84;
const BASE_UINT32: u8 = 0x86;

const CRC_TABLE: [u16; 16] = [
    0x0000, 0xCC01, 0xD801, 0x1400, 0xF001, 0x3C00, 0x2800, 0xE401, 0xA001, 0x6C00, 0x7800,
    0xB401, 0x5000, 0x9C01, 0x8801, 0x4400,
];

/// FIT CRC-16 over `bytes`
pub fn fit_crc(bytes: &[u8]) -> u16 {
    bytes.iter().fold(0u16, |crc, &byte| {
        let mut crc = crc;
        for nibble in [byte & 0x0F, byte >> 4] {
            let tmp = CRC_TABLE[(crc & 0x0F) as usize];
            crc = (crc >> 4) & 0x0FFF;
            crc = crc ^ tmp ^ CRC_TABLE[nibble as usize];
        }
        crc
    })
}

/// One encoded field value
#[derive(Debug, Clone, Copy)]
enum FieldValue {
    Enum(u8),
    U8(u8),
    U16(u16),
    U32(u32),
}

impl FieldValue {
    const fn base_type(self) -> u8 {
        match self {
            Self::Enum(_) => BASE_ENUM,
            Self::U8(_) => BASE_UINT8,
            Self::U16(_) => BASE_UINT16,
            Self::U32(_) => BASE_UINT32,
        }
    }

    const fn size(self) -> u8 {
        match self {
            Self::Enum(_) | Self::U8(_) => 1,
            Self::U16(_) => 2,
            Self::U32(_) => 4,
        }
    }

    fn write(self, out: &mut Vec<u8>) {
        match self {
            Self::Enum(v) | Self::U8(v) => out.push(v),
            Self::U16(v) => out.extend_from_slice(&v.to_le_bytes()),
            Self::U32(v) => out.extend_from_slice(&v.to_le_bytes()),
        }
    }
}

fn fit_timestamp(time: DateTime<Utc>) -> FieldValue {
    FieldValue::U32((time.timestamp() - FIT_EPOCH_OFFSET) as u32)
}

fn scaled_u16(value: f64, scale: f64, offset: f64) -> FieldValue {
    FieldValue::U16(((value + offset) * scale).round() as u16)
}

fn scaled_u32(value: f64, scale: f64) -> FieldValue {
    FieldValue::U32((value * scale).round() as u32)
}

/// One record message
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordSpec {
    /// Seconds after the builder start time; `None` omits the timestamp
    pub offset_s: Option<i64>,
    pub heart_rate: Option<u8>,
    pub speed_mps: Option<f64>,
    pub distance_m: Option<f64>,
    pub altitude_m: Option<f64>,
    pub cadence: Option<u8>,
    pub power: Option<u16>,
    /// Written as `enhanced_speed` (field 73)
    pub enhanced_speed_mps: Option<f64>,
    /// Written as `enhanced_altitude` (field 78)
    pub enhanced_altitude_m: Option<f64>,
}

/// One lap message
#[derive(Debug, Clone, Copy, Default)]
pub struct LapSpec {
    pub offset_s: i64,
    pub timer_time_s: Option<f64>,
    pub elapsed_time_s: Option<f64>,
    pub distance_m: Option<f64>,
    pub avg_hr: Option<u8>,
    pub avg_speed_mps: Option<f64>,
    /// FIT `lap_trigger`: 0 manual, 1 time, 2 distance, 7 session end
    pub trigger: Option<u8>,
}

/// One session message
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSpec {
    /// FIT `sport`: 1 running, 2 cycling
    pub sport: Option<u8>,
    pub elapsed_s: Option<f64>,
    pub timer_s: Option<f64>,
    pub distance_m: Option<f64>,
    pub avg_speed_mps: Option<f64>,
    pub avg_hr: Option<u8>,
    pub max_hr: Option<u8>,
    pub ascent_m: Option<u16>,
    pub descent_m: Option<u16>,
    pub calories: Option<u16>,
}

/// In-memory FIT activity file encoder
pub struct FitFileBuilder {
    start: DateTime<Utc>,
    data: Vec<u8>,
}

impl FitFileBuilder {
    /// Start an activity file whose messages are timed relative to `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        let mut builder = Self {
            start,
            data: Vec::new(),
        };
        builder.message(
            GLOBAL_FILE_ID,
            &[
                (0, Some(FieldValue::Enum(4))),
                (1, Some(FieldValue::U16(1))),
                (4, Some(fit_timestamp(start))),
            ],
        );
        builder
    }

    /// Append a record message
    pub fn record(&mut self, spec: &RecordSpec) -> &mut Self {
        let timestamp = spec
            .offset_s
            .map(|secs| fit_timestamp(self.start + Duration::seconds(secs)));
        self.message(
            GLOBAL_RECORD,
            &[
                (253, timestamp),
                (3, spec.heart_rate.map(FieldValue::U8)),
                (4, spec.cadence.map(FieldValue::U8)),
                (5, spec.distance_m.map(|m| scaled_u32(m, 100.0))),
                (6, spec.speed_mps.map(|v| scaled_u16(v, 1000.0, 0.0))),
                (7, spec.power.map(FieldValue::U16)),
                (2, spec.altitude_m.map(|m| scaled_u16(m, 5.0, 500.0))),
                (73, spec.enhanced_speed_mps.map(|v| scaled_u32(v, 1000.0))),
                (78, spec.enhanced_altitude_m.map(|m| scaled_u32(m + 500.0, 5.0))),
            ],
        );
        self
    }

    /// Append a lap message
    pub fn lap(&mut self, spec: &LapSpec) -> &mut Self {
        let start = self.start + Duration::seconds(spec.offset_s);
        self.message(
            GLOBAL_LAP,
            &[
                (2, Some(fit_timestamp(start))),
                (7, spec.elapsed_time_s.map(|s| scaled_u32(s, 1000.0))),
                (8, spec.timer_time_s.map(|s| scaled_u32(s, 1000.0))),
                (9, spec.distance_m.map(|m| scaled_u32(m, 100.0))),
                (13, spec.avg_speed_mps.map(|v| scaled_u16(v, 1000.0, 0.0))),
                (15, spec.avg_hr.map(FieldValue::U8)),
                (24, spec.trigger.map(FieldValue::Enum)),
            ],
        );
        self
    }

    /// Append a session message starting at the builder start time
    pub fn session(&mut self, spec: &SessionSpec) -> &mut Self {
        self.message(
            GLOBAL_SESSION,
            &[
                (2, Some(fit_timestamp(self.start))),
                (5, spec.sport.map(FieldValue::Enum)),
                (7, spec.elapsed_s.map(|s| scaled_u32(s, 1000.0))),
                (8, spec.timer_s.map(|s| scaled_u32(s, 1000.0))),
                (9, spec.distance_m.map(|m| scaled_u32(m, 100.0))),
                (11, spec.calories.map(FieldValue::U16)),
                (14, spec.avg_speed_mps.map(|v| scaled_u16(v, 1000.0, 0.0))),
                (16, spec.avg_hr.map(FieldValue::U8)),
                (17, spec.max_hr.map(FieldValue::U8)),
                (22, spec.ascent_m.map(FieldValue::U16)),
                (23, spec.descent_m.map(FieldValue::U16)),
            ],
        );
        self
    }

    /// Finish the file: header with CRC, messages, trailing file CRC
    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 16);
        out.push(14);
        out.push(0x20);
        out.extend_from_slice(&2132u16.to_le_bytes());
        out.extend_from_slice(&(self.data.len() as u32).to_le_bytes());
        out.extend_from_slice(b".FIT");
        let header_crc = fit_crc(&out);
        out.extend_from_slice(&header_crc.to_le_bytes());
        out.extend_from_slice(&self.data);
        let file_crc = fit_crc(&out);
        out.extend_from_slice(&file_crc.to_le_bytes());
        out
    }

    fn message(&mut self, global: u16, fields: &[(u8, Option<FieldValue>)]) {
        let present: Vec<(u8, FieldValue)> = fields
            .iter()
            .filter_map(|(num, value)| value.map(|v| (*num, v)))
            .collect();

        self.data.push(0x40);
        self.data.push(0);
        self.data.push(0);
        self.data.extend_from_slice(&global.to_le_bytes());
        self.data.push(present.len() as u8);
        for (num, value) in &present {
            self.data
                .extend_from_slice(&[*num, value.size(), value.base_type()]);
        }

        self.data.push(0x00);
        for (_, value) in &present {
            value.write(&mut self.data);
        }
    }
}

/// Fixed start time used across tests
pub fn morning(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 6, 0, 0).unwrap()
}

/// A steady run: one record per second plus one lap and one running session
pub fn steady_run(start: DateTime<Utc>, seconds: i64, heart_rate: u8, speed_mps: f64) -> Vec<u8> {
    let mut builder = FitFileBuilder::new(start);
    for i in 0..=seconds {
        builder.record(&RecordSpec {
            offset_s: Some(i),
            heart_rate: Some(heart_rate),
            speed_mps: Some(speed_mps),
            distance_m: Some(speed_mps * i as f64),
            altitude_m: Some(100.0),
            cadence: Some(85),
            ..RecordSpec::default()
        });
    }
    let distance = speed_mps * seconds as f64;
    builder
        .lap(&LapSpec {
            offset_s: 0,
            timer_time_s: Some(seconds as f64),
            distance_m: Some(distance),
            avg_hr: Some(heart_rate),
            avg_speed_mps: Some(speed_mps),
            trigger: Some(7),
            ..LapSpec::default()
        })
        .session(&SessionSpec {
            sport: Some(1),
            elapsed_s: Some(seconds as f64),
            timer_s: Some(seconds as f64),
            distance_m: Some(distance),
            avg_speed_mps: Some(speed_mps),
            avg_hr: Some(heart_rate),
            max_hr: Some(heart_rate),
            ..SessionSpec::default()
        });
    builder.build()
}
