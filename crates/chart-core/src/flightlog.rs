// File: crates/chart-core/src/flightlog.rs
// Summary: Decoder for base64 page dumps of the flight computer log (accel, barometer, gyro records).
// Notes:
// - A page is `NOVA` followed by records; each record opens with its tag byte
//   written twice. Pages are cut at a fixed size, so the last record of a page
//   is usually incomplete and is dropped without error.

use base64::Engine;

use crate::error::DecodeError;

/// Lines at or below this length are not pages (headers, blank lines, prompts).
pub const MIN_PAGE_LINE_LEN: usize = 500;

const MAGIC: &[u8; 4] = b"NOVA";
/// High-g accelerometer runs in the +-6 g range.
const ACCEL_FULL_SCALE_G: f64 = 6.0;
/// Gyro runs in the +-2000 deg/s range.
const GYRO_FULL_SCALE_DPS: f64 = 2000.0;
const CELSIUS_TO_KELVIN: f64 = 273.15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reading {
    /// Acceleration per axis, in g.
    Accel { x: f64, y: f64, z: f64 },
    Baro { temperature_k: f64, pressure_pa: f64 },
    /// Angular rate per axis, in degrees per second.
    Gyro { x: f64, y: f64, z: f64 },
}

impl Reading {
    /// Magnitude of an acceleration reading.
    pub fn g_load(&self) -> Option<f64> {
        match *self {
            Reading::Accel { x, y, z } => Some((x * x + y * y + z * z).sqrt()),
            _ => None,
        }
    }

    pub fn pressure(&self) -> Option<f64> {
        match *self {
            Reading::Baro { pressure_pa, .. } => Some(pressure_pa),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DumpOptions {
    /// Stop after this many pages.
    pub max_pages: Option<usize>,
}

/// Every reading of a dump, in page and record order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlightLog {
    pub readings: Vec<Reading>,
    pub pages: usize,
}

impl FlightLog {
    /// Decode a text dump with one base64 page per long line.
    pub fn from_dump(text: &str, opts: &DumpOptions) -> Result<Self, DecodeError> {
        let engine = base64::engine::general_purpose::STANDARD;
        let mut dump = FlightLog::default();
        for (i, line) in text.lines().enumerate() {
            if opts.max_pages.is_some_and(|max| dump.pages >= max) {
                log::debug!("page limit reached at line {}", i + 1);
                break;
            }
            let line = line.trim();
            if line.len() <= MIN_PAGE_LINE_LEN {
                continue;
            }
            let bytes = engine
                .decode(line)
                .map_err(|source| DecodeError::Base64 { line: i + 1, source })?;
            let before = dump.readings.len();
            decode_page(&bytes, &mut dump.readings)?;
            log::debug!("page {}: {} readings", dump.pages, dump.readings.len() - before);
            dump.pages += 1;
        }
        log::info!("decoded {} readings from {} pages", dump.readings.len(), dump.pages);
        Ok(dump)
    }

    pub fn g_loads(&self) -> Vec<f64> {
        self.readings.iter().filter_map(Reading::g_load).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.readings.iter().filter_map(Reading::pressure).collect()
    }
}

/// Decode one page, appending complete records to `out`.
pub fn decode_page(bytes: &[u8], out: &mut Vec<Reading>) -> Result<(), DecodeError> {
    match PageDecoder::new(bytes).read_into(out) {
        Err(DecodeError::BufferUnderflow) => Ok(()),
        other => other,
    }
}

struct PageDecoder<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PageDecoder<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn read_into(&mut self, out: &mut Vec<Reading>) -> Result<(), DecodeError> {
        for &b in MAGIC {
            self.expect(b)?;
        }
        loop {
            let at = self.offset;
            let tag = self.tag_pair()?;
            let reading = match tag {
                b'A' => {
                    let [x, y, z] = self.axes(ACCEL_FULL_SCALE_G)?;
                    Reading::Accel { x, y, z }
                }
                b'B' => {
                    let centi_c = self.read_i32_le()?;
                    // sensor already reports pascals
                    let pressure_pa = self.read_i32_le()? as f64;
                    Reading::Baro {
                        temperature_k: centi_c as f64 / 100.0 + CELSIUS_TO_KELVIN,
                        pressure_pa,
                    }
                }
                b'G' => {
                    let [x, y, z] = self.axes(GYRO_FULL_SCALE_DPS)?;
                    Reading::Gyro { x, y, z }
                }
                tag => return Err(DecodeError::UnknownTag { tag, index: at }),
            };
            out.push(reading);
        }
    }

    /// Consume a record tag written twice.
    fn tag_pair(&mut self) -> Result<u8, DecodeError> {
        let at = self.offset;
        let [first, second] = self.read_buf::<2>()?;
        if first == second {
            Ok(first)
        } else {
            Err(DecodeError::Misaligned { index: at })
        }
    }

    /// Three little-endian i16 axes scaled so `i16::MAX` maps to `full_scale`.
    fn axes(&mut self, full_scale: f64) -> Result<[f64; 3], DecodeError> {
        let k = full_scale / i16::MAX as f64;
        let x = self.read_i16_le()? as f64 * k;
        let y = self.read_i16_le()? as f64 * k;
        let z = self.read_i16_le()? as f64 * k;
        Ok([x, y, z])
    }

    fn expect(&mut self, expected: u8) -> Result<(), DecodeError> {
        let index = self.offset;
        let [got] = self.read_buf::<1>()?;
        if got == expected {
            Ok(())
        } else {
            Err(DecodeError::Unexpected { expected, got, index })
        }
    }

    fn read_buf<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let end = self.offset + N;
        let slice = self.data.get(self.offset..end).ok_or(DecodeError::BufferUnderflow)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(slice);
        self.offset = end;
        Ok(buf)
    }

    fn read_i16_le(&mut self) -> Result<i16, DecodeError> {
        Ok(i16::from_le_bytes(self.read_buf()?))
    }

    fn read_i32_le(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.read_buf()?))
    }
}
