//! Model identifiers and the fixed precession → obliquity / nutation lookup.

use std::fmt;
use std::str::FromStr;

use crate::{FrameError, ModelKind};

/// Frame in which a precession theory's series were derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeFrame {
    Ecliptic,
    Equatorial,
}

/// Precession theories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecessionModel {
    /// Lieske et al. (1977), IAU 1976 constants.
    Iau1976,
    /// Laskar (1986).
    Laskar1986,
    /// Williams (1994), DE403.
    Williams1994,
    /// Simon et al. (1994).
    Simon1994,
    /// JPL DE403–DE406 fit.
    De4xx,
    /// IAU 2000 (Capitaine et al. 2003, SOFA).
    Iau2000,
    /// IAU 2006 (Capitaine et al. 2003, Hilton et al. 2006).
    Iau2006,
    /// IAU 2006 precession with the 2009 cartographic rotation models.
    Iau2009,
    /// Vondrák et al. (2011) long-term precession.
    Vondrak2011,
}

/// Mean obliquity models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObliquityModel {
    Williams1994,
    Simon1994,
    Laskar1996,
    Iau1976,
    Iau2006,
    Vondrak2011,
}

/// Nutation series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NutationModel {
    Iau1980,
    Iau2000,
    Iau2006,
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .collect::<String>()
        .to_ascii_uppercase()
}

impl PrecessionModel {
    pub const ALL: [PrecessionModel; 9] = [
        PrecessionModel::Iau1976,
        PrecessionModel::Laskar1986,
        PrecessionModel::Williams1994,
        PrecessionModel::Simon1994,
        PrecessionModel::De4xx,
        PrecessionModel::Iau2000,
        PrecessionModel::Iau2006,
        PrecessionModel::Iau2009,
        PrecessionModel::Vondrak2011,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrecessionModel::Iau1976 => "IAU1976",
            PrecessionModel::Laskar1986 => "LASKAR1986",
            PrecessionModel::Williams1994 => "WILLIAMS1994",
            PrecessionModel::Simon1994 => "SIMON1994",
            PrecessionModel::De4xx => "DE4XX",
            PrecessionModel::Iau2000 => "IAU2000",
            PrecessionModel::Iau2006 => "IAU2006",
            PrecessionModel::Iau2009 => "IAU2009",
            PrecessionModel::Vondrak2011 => "VONDRAK2011",
        }
    }

    /// Numeric identifier, 1–9.
    pub fn id(self) -> u8 {
        match self {
            PrecessionModel::Iau1976 => 1,
            PrecessionModel::Laskar1986 => 2,
            PrecessionModel::Williams1994 => 3,
            PrecessionModel::Simon1994 => 4,
            PrecessionModel::De4xx => 5,
            PrecessionModel::Iau2000 => 6,
            PrecessionModel::Iau2006 => 7,
            PrecessionModel::Iau2009 => 8,
            PrecessionModel::Vondrak2011 => 9,
        }
    }

    pub fn frame(self) -> NativeFrame {
        match self {
            PrecessionModel::Iau1976
            | PrecessionModel::Laskar1986
            | PrecessionModel::Williams1994
            | PrecessionModel::Simon1994
            | PrecessionModel::De4xx => NativeFrame::Ecliptic,
            PrecessionModel::Iau2000
            | PrecessionModel::Iau2006
            | PrecessionModel::Iau2009
            | PrecessionModel::Vondrak2011 => NativeFrame::Equatorial,
        }
    }

    pub fn is_ecliptic(self) -> bool {
        self.frame() == NativeFrame::Ecliptic
    }

    /// Obliquity model paired with this precession theory.
    pub fn obliquity_model(self) -> ObliquityModel {
        match self {
            PrecessionModel::Vondrak2011 => ObliquityModel::Vondrak2011,
            PrecessionModel::Iau2000 | PrecessionModel::Iau2006 | PrecessionModel::Iau2009 => {
                ObliquityModel::Iau2006
            }
            PrecessionModel::Williams1994 | PrecessionModel::De4xx => ObliquityModel::Williams1994,
            PrecessionModel::Simon1994 => ObliquityModel::Simon1994,
            PrecessionModel::Laskar1986 => ObliquityModel::Laskar1996,
            PrecessionModel::Iau1976 => ObliquityModel::Iau1976,
        }
    }

    /// Nutation series paired with this precession theory.
    pub fn nutation_model(self) -> NutationModel {
        match self {
            PrecessionModel::Iau2006 | PrecessionModel::Iau2009 => NutationModel::Iau2006,
            PrecessionModel::Williams1994
            | PrecessionModel::De4xx
            | PrecessionModel::Simon1994
            | PrecessionModel::Laskar1986
            | PrecessionModel::Iau1976 => NutationModel::Iau1980,
            PrecessionModel::Iau2000 | PrecessionModel::Vondrak2011 => NutationModel::Iau2000,
        }
    }
}

impl TryFrom<u8> for PrecessionModel {
    type Error = FrameError;

    fn try_from(id: u8) -> Result<Self, FrameError> {
        PrecessionModel::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| FrameError::out_of_range(ModelKind::Precession, id))
    }
}

impl FromStr for PrecessionModel {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, FrameError> {
        let key = normalize(s);
        PrecessionModel::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| FrameError::out_of_range(ModelKind::Precession, s))
    }
}

impl fmt::Display for PrecessionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ObliquityModel {
    pub const ALL: [ObliquityModel; 6] = [
        ObliquityModel::Williams1994,
        ObliquityModel::Simon1994,
        ObliquityModel::Laskar1996,
        ObliquityModel::Iau1976,
        ObliquityModel::Iau2006,
        ObliquityModel::Vondrak2011,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObliquityModel::Williams1994 => "WILLIAMS1994",
            ObliquityModel::Simon1994 => "SIMON1994",
            ObliquityModel::Laskar1996 => "LASKAR1996",
            ObliquityModel::Iau1976 => "IAU1976",
            ObliquityModel::Iau2006 => "IAU2006",
            ObliquityModel::Vondrak2011 => "VONDRAK2011",
        }
    }

    /// Numeric identifier, 1–6.
    pub fn id(self) -> u8 {
        match self {
            ObliquityModel::Williams1994 => 1,
            ObliquityModel::Simon1994 => 2,
            ObliquityModel::Laskar1996 => 3,
            ObliquityModel::Iau1976 => 4,
            ObliquityModel::Iau2006 => 5,
            ObliquityModel::Vondrak2011 => 6,
        }
    }
}

impl TryFrom<u8> for ObliquityModel {
    type Error = FrameError;

    fn try_from(id: u8) -> Result<Self, FrameError> {
        ObliquityModel::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| FrameError::out_of_range(ModelKind::Obliquity, id))
    }
}

impl FromStr for ObliquityModel {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, FrameError> {
        let key = normalize(s);
        ObliquityModel::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| FrameError::out_of_range(ModelKind::Obliquity, s))
    }
}

impl fmt::Display for ObliquityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl NutationModel {
    pub const ALL: [NutationModel; 3] = [
        NutationModel::Iau1980,
        NutationModel::Iau2000,
        NutationModel::Iau2006,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NutationModel::Iau1980 => "IAU1980",
            NutationModel::Iau2000 => "IAU2000",
            NutationModel::Iau2006 => "IAU2006",
        }
    }

    /// Numeric identifier, 2–4.
    pub fn id(self) -> u8 {
        match self {
            NutationModel::Iau1980 => 2,
            NutationModel::Iau2000 => 3,
            NutationModel::Iau2006 => 4,
        }
    }
}

impl TryFrom<u8> for NutationModel {
    type Error = FrameError;

    fn try_from(id: u8) -> Result<Self, FrameError> {
        NutationModel::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| FrameError::out_of_range(ModelKind::Nutation, id))
    }
}

impl FromStr for NutationModel {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, FrameError> {
        let key = normalize(s);
        NutationModel::ALL
            .into_iter()
            .find(|m| m.name() == key)
            .ok_or_else(|| FrameError::out_of_range(ModelKind::Nutation, s))
    }
}

impl fmt::Display for NutationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
