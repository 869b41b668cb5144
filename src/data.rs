//! Embedded GREET 2023rev1 Emission Factors
//!
//! Lifecycle GHG intensity forecasts for freight transportation, keyed by
//! forecast year, transport mode, engine technology, and fuel pathway.
//! Values are transcribed verbatim from the GREET 2023rev1 extraction and
//! kept exactly as published, including fuel-label drift across forecast
//! years (e.g. Marine/MeOH "Renewable-Natural-Gas" in 2025 vs "RNG" from
//! 2030 onward). Nothing here is normalized or interpolated.

/// A single fuel pathway with its lifecycle GHG intensity.
///
/// `ghg` can be negative: credited pathways such as renewable natural gas
/// remove more carbon upstream than the vessel emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelRecord {
    pub fuel: &'static str,
    pub ghg: f64,
    pub unit: &'static str,
}

/// Fuel pathways available under one engine technology.
#[derive(Debug, Clone, Copy)]
pub struct EngineGroup {
    pub engine: &'static str,
    pub fuels: &'static [FuelRecord],
}

/// Engine technologies available under one transport mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeGroup {
    pub mode: &'static str,
    pub engines: &'static [EngineGroup],
}

/// All modes projected for one forecast year.
#[derive(Debug, Clone, Copy)]
pub struct YearTable {
    pub year: i32,
    pub modes: &'static [ModeGroup],
}

/// Provenance of the embedded data.
pub static METADATA: &str =
    "RECOIL GLEAM data - extracted from GREET 2023rev1 - MIT License - Copyright (c) 2024 Dr. Zeyu Liu";

/// GHG intensity forecast, 2025 through 2050 in five-year steps.
pub static FORECAST: &[YearTable] = &[
    YearTable {
        year: 2025,
        modes: &[
            ModeGroup {
                mode: "Long_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 1489.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 1303.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 405.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 1609.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1427.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 1357.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1407.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 981.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Co-Optimized",
                        fuels: &[
                            FuelRecord { fuel: "Algae-HTL", ghg: 546.45, unit: "g/mile" },
                            FuelRecord { fuel: "Wastewater-Sludge-HTL", ghg: 1266.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MCCI",
                        fuels: &[
                            FuelRecord { fuel: "Waste-Feedstock", ghg: 761.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1254.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1736.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Short_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 2753.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 2408.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 748.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 2974.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2694.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 2504.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2600.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 938.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1342.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1858.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Rail",
                engines: &[
                    EngineGroup {
                        engine: "Diesel-Electric",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 26.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LNG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LPG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "DME", ghg: 28.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FTD", ghg: 27.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biodiesel-20", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Diesel-II", ghg: 9.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Gasoline", ghg: 4.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Gaseous-Hydrogen", ghg: 18.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Electricity", ghg: 13.00, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Marine",
                engines: &[
                    EngineGroup {
                        engine: "HFO",
                        fuels: &[
                            FuelRecord { fuel: "HFO-2.7", ghg: 16.61, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.5", ghg: 16.82, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.1", ghg: 16.88, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MDO",
                        fuels: &[
                            FuelRecord { fuel: "MDO-1.92", ghg: 15.90, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.5", ghg: 16.04, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.1", ghg: 16.09, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MGO",
                        fuels: &[
                            FuelRecord { fuel: "MGO-1", ghg: 15.97, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.5", ghg: 16.04, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.1", ghg: 16.09, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "LNG",
                        fuels: &[
                            FuelRecord { fuel: "LNG", ghg: 15.59, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "FTD",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 18.28, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Coal", ghg: 20.87, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Natural-Gas", ghg: 11.85, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 1.05, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Renewable-Diesel",
                        fuels: &[
                            FuelRecord { fuel: "Yellow-Grease-HFO", ghg: 8.88, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Yellow-Grease", ghg: 2.60, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SVO",
                        fuels: &[
                            FuelRecord { fuel: "SVO", ghg: 2.51, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Bio-Oil",
                        fuels: &[
                            FuelRecord { fuel: "Pyrolysis-Oil-Woody-Biomass", ghg: 1.77, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Biodiesel",
                        fuels: &[
                            FuelRecord { fuel: "Biodiesel", ghg: 5.66, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MeOH",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 23.11, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Flare-Gas", ghg: 1.77, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Natural-Gas", ghg: -64.45, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 4.24, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
        ],
    },
    YearTable {
        year: 2030,
        modes: &[
            ModeGroup {
                mode: "Long_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 1342.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 1172.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 334.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 1430.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1293.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 1215.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1277.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 524.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Co-Optimized",
                        fuels: &[
                            FuelRecord { fuel: "Algae-HTL", ghg: 469.27, unit: "g/mile" },
                            FuelRecord { fuel: "Wastewater-Sludge-HTL", ghg: 1140.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MCCI",
                        fuels: &[
                            FuelRecord { fuel: "Waste-Feedstock", ghg: 678.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1056.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1333.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Short_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 2625.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 2292.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 653.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 2797.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2583.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 2373.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2492.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 516.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1175.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1484.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Rail",
                engines: &[
                    EngineGroup {
                        engine: "Diesel-Electric",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 26.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LNG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LPG", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "DME", ghg: 28.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FTD", ghg: 27.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biodiesel-20", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Diesel-II", ghg: 9.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Gasoline", ghg: 4.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Gaseous-Hydrogen", ghg: 17.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Electricity", ghg: 8.00, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Marine",
                engines: &[
                    EngineGroup {
                        engine: "HFO",
                        fuels: &[
                            FuelRecord { fuel: "HFO-2.7", ghg: 16.51, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.5", ghg: 16.72, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.1", ghg: 16.78, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MDO",
                        fuels: &[
                            FuelRecord { fuel: "MDO-1.92", ghg: 15.81, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.5", ghg: 15.94, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.1", ghg: 16.00, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MGO",
                        fuels: &[
                            FuelRecord { fuel: "MGO-1", ghg: 15.87, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.5", ghg: 15.94, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.1", ghg: 15.99, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "LNG",
                        fuels: &[
                            FuelRecord { fuel: "LNG", ghg: 15.56, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "FTD",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 18.26, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Coal", ghg: 20.79, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Natural-Gas", ghg: 11.82, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 0.99, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Renewable-Diesel",
                        fuels: &[
                            FuelRecord { fuel: "YG&HFO", ghg: 8.80, unit: "g/ton.mile" },
                            FuelRecord { fuel: "YG", ghg: 2.50, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SVO",
                        fuels: &[
                            FuelRecord { fuel: "SVO", ghg: 2.39, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Bio-Oil",
                        fuels: &[
                            FuelRecord { fuel: "PO-WB", ghg: 1.43, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Biodiesel",
                        fuels: &[
                            FuelRecord { fuel: "Biodiesel", ghg: 5.48, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MeOH",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 22.74, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FG", ghg: 1.41, unit: "g/ton.mile" },
                            FuelRecord { fuel: "RNG", ghg: -66.72, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 3.69, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
        ],
    },
    YearTable {
        year: 2035,
        modes: &[
            ModeGroup {
                mode: "Long_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 1238.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 1081.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 301.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 1316.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1293.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 1121.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1181.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 413.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Co-Optimized",
                        fuels: &[
                            FuelRecord { fuel: "Algae-HTL", ghg: 434.46, unit: "g/mile" },
                            FuelRecord { fuel: "Wastewater-Sludge-HTL", ghg: 1051.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MCCI",
                        fuels: &[
                            FuelRecord { fuel: "Waste-Feedstock", ghg: 623.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 933.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1160.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Short_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 2537.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 2215.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 617.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 2697.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2498.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 2292.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2410.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 421.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1080.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1342.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Rail",
                engines: &[
                    EngineGroup {
                        engine: "Diesel-Electric",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 26.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LNG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LPG", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "DME", ghg: 28.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FTD", ghg: 27.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biodiesel-20", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Diesel-II", ghg: 9.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Gasoline", ghg: 4.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Gaseous-Hydrogen", ghg: 17.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Electricity", ghg: 7.00, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Marine",
                engines: &[
                    EngineGroup {
                        engine: "HFO",
                        fuels: &[
                            FuelRecord { fuel: "HFO-2.7", ghg: 16.49, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.5", ghg: 16.70, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.1", ghg: 16.76, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MDO",
                        fuels: &[
                            FuelRecord { fuel: "MDO-1.92", ghg: 15.79, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.5", ghg: 15.93, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.1", ghg: 15.98, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MGO",
                        fuels: &[
                            FuelRecord { fuel: "MGO-1", ghg: 15.85, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.5", ghg: 15.91, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.1", ghg: 15.97, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "LNG",
                        fuels: &[
                            FuelRecord { fuel: "LNG", ghg: 15.56, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "FTD",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 18.25, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Coal", ghg: 20.77, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Natural-Gas", ghg: 11.81, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 0.96, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Renewable-Diesel",
                        fuels: &[
                            FuelRecord { fuel: "YG&HFO", ghg: 8.79, unit: "g/ton.mile" },
                            FuelRecord { fuel: "YG", ghg: 2.48, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SVO",
                        fuels: &[
                            FuelRecord { fuel: "SVO", ghg: 2.37, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Bio-Oil",
                        fuels: &[
                            FuelRecord { fuel: "PO-WB", ghg: 1.35, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Biodiesel",
                        fuels: &[
                            FuelRecord { fuel: "Biodiesel", ghg: 5.45, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MeOH",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 22.68, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FG", ghg: 1.34, unit: "g/ton.mile" },
                            FuelRecord { fuel: "RNG", ghg: -67.12, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 3.88, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
        ],
    },
    YearTable {
        year: 2040,
        modes: &[
            ModeGroup {
                mode: "Long_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 1238.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 1080.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 299.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 1315.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1194.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 1120.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1181.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 396.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Co-Optimized",
                        fuels: &[
                            FuelRecord { fuel: "Algae-HTL", ghg: 432.55, unit: "g/mile" },
                            FuelRecord { fuel: "Wastewater-Sludge-HTL", ghg: 1051.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MCCI",
                        fuels: &[
                            FuelRecord { fuel: "Waste-Feedstock", ghg: 623.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 930.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1149.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Short_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 2537.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 2214.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 613.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 2694.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2498.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 2290.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2410.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 403.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1077.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1330.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Rail",
                engines: &[
                    EngineGroup {
                        engine: "Diesel-Electric",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 26.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LNG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LPG", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "DME", ghg: 28.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FTD", ghg: 27.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biodiesel-20", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Diesel-II", ghg: 9.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Gasoline", ghg: 4.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Gaseous-Hydrogen", ghg: 17.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Electricity", ghg: 6.00, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Marine",
                engines: &[
                    EngineGroup {
                        engine: "HFO",
                        fuels: &[
                            FuelRecord { fuel: "HFO-2.7", ghg: 16.48, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.5", ghg: 16.70, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.1", ghg: 16.75, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MDO",
                        fuels: &[
                            FuelRecord { fuel: "MDO-1.92", ghg: 15.78, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.5", ghg: 15.92, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.1", ghg: 15.97, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MGO",
                        fuels: &[
                            FuelRecord { fuel: "MGO-1", ghg: 15.85, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.5", ghg: 15.91, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.1", ghg: 15.96, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "LNG",
                        fuels: &[
                            FuelRecord { fuel: "LNG", ghg: 15.56, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "FTD",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 18.25, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Coal", ghg: 20.77, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Natural-Gas", ghg: 11.81, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 0.96, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Renewable-Diesel",
                        fuels: &[
                            FuelRecord { fuel: "YG&HFO", ghg: 8.78, unit: "g/ton.mile" },
                            FuelRecord { fuel: "YG", ghg: 2.47, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SVO",
                        fuels: &[
                            FuelRecord { fuel: "SVO", ghg: 2.37, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Bio-Oil",
                        fuels: &[
                            FuelRecord { fuel: "PO-WB", ghg: 1.34, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Biodiesel",
                        fuels: &[
                            FuelRecord { fuel: "Biodiesel", ghg: 5.44, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MeOH",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 22.66, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FG", ghg: 1.32, unit: "g/ton.mile" },
                            FuelRecord { fuel: "RNG", ghg: -67.24, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 3.87, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
        ],
    },
    YearTable {
        year: 2045,
        modes: &[
            ModeGroup {
                mode: "Long_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 1237.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 1080.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 298.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 1313.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1194.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 1119.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1181.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 378.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Co-Optimized",
                        fuels: &[
                            FuelRecord { fuel: "Algae-HTL", ghg: 430.60, unit: "g/mile" },
                            FuelRecord { fuel: "Wastewater-Sludge-HTL", ghg: 1050.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MCCI",
                        fuels: &[
                            FuelRecord { fuel: "Waste-Feedstock", ghg: 622.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 928.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1139.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Short_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 2536.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 2213.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 610.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 2690.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2498.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 2289.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2410.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 385.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 1074.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1318.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Rail",
                engines: &[
                    EngineGroup {
                        engine: "Diesel-Electric",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 26.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LNG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LPG", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "DME", ghg: 28.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FTD", ghg: 27.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biodiesel-20", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Diesel-II", ghg: 9.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Gasoline", ghg: 4.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Gaseous-Hydrogen", ghg: 17.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Electricity", ghg: 6.00, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Marine",
                engines: &[
                    EngineGroup {
                        engine: "HFO",
                        fuels: &[
                            FuelRecord { fuel: "HFO-2.7", ghg: 16.48, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.5", ghg: 16.69, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.1", ghg: 16.75, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MDO",
                        fuels: &[
                            FuelRecord { fuel: "MDO-1.92", ghg: 15.78, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.5", ghg: 15.92, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.1", ghg: 15.97, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MGO",
                        fuels: &[
                            FuelRecord { fuel: "MGO-1", ghg: 15.84, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.5", ghg: 15.90, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.1", ghg: 15.96, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "LNG",
                        fuels: &[
                            FuelRecord { fuel: "LNG", ghg: 15.56, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "FTD",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 18.25, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Coal", ghg: 20.77, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Natural-Gas", ghg: 11.81, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 0.96, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Renewable-Diesel",
                        fuels: &[
                            FuelRecord { fuel: "YG&HFO", ghg: 8.78, unit: "g/ton.mile" },
                            FuelRecord { fuel: "YG", ghg: 2.46, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SVO",
                        fuels: &[
                            FuelRecord { fuel: "SVO", ghg: 2.36, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Bio-Oil",
                        fuels: &[
                            FuelRecord { fuel: "PO-WB", ghg: 1.32, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Biodiesel",
                        fuels: &[
                            FuelRecord { fuel: "Biodiesel", ghg: 5.43, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MeOH",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 22.64, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FG", ghg: 1.30, unit: "g/ton.mile" },
                            FuelRecord { fuel: "RNG", ghg: -67.36, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 3.86, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
        ],
    },
    YearTable {
        year: 2050,
        modes: &[
            ModeGroup {
                mode: "Long_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 1096.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 957.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 259.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 1162.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1050.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 994.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 1181.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 307.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Co-Optimized",
                        fuels: &[
                            FuelRecord { fuel: "Algae-HTL", ghg: 386.46, unit: "g/mile" },
                            FuelRecord { fuel: "Wastewater-Sludge-HTL", ghg: 931.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MCCI",
                        fuels: &[
                            FuelRecord { fuel: "Waste-Feedstock", ghg: 550.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 789.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 962.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Short_Haul",
                engines: &[
                    EngineGroup {
                        engine: "CIDI",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 2425.00, unit: "g/mile" },
                            FuelRecord { fuel: "Biodiesel", ghg: 2116.00, unit: "g/mile" },
                            FuelRecord { fuel: "Renewable-Diesel", ghg: 573.00, unit: "g/mile" },
                            FuelRecord { fuel: "DME", ghg: 2571.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2391.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SL",
                        fuels: &[
                            FuelRecord { fuel: "CNG", ghg: 2190.00, unit: "g/mile" },
                            FuelRecord { fuel: "LNG", ghg: 2306.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Electric",
                        fuels: &[
                            FuelRecord { fuel: "Electricity", ghg: 316.00, unit: "g/mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Fuel-Cell",
                        fuels: &[
                            FuelRecord { fuel: "GH2", ghg: 934.00, unit: "g/mile" },
                            FuelRecord { fuel: "LH2", ghg: 1139.00, unit: "g/mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Rail",
                engines: &[
                    EngineGroup {
                        engine: "Diesel-Electric",
                        fuels: &[
                            FuelRecord { fuel: "Diesel", ghg: 26.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LNG", ghg: 23.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "LPG", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "DME", ghg: 28.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FTD", ghg: 27.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biodiesel-20", ghg: 22.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Diesel-II", ghg: 9.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Renewable-Gasoline", ghg: 4.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Gaseous-Hydrogen", ghg: 16.00, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Electricity", ghg: 6.00, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
            ModeGroup {
                mode: "Marine",
                engines: &[
                    EngineGroup {
                        engine: "HFO",
                        fuels: &[
                            FuelRecord { fuel: "HFO-2.7", ghg: 16.46, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.5", ghg: 16.68, unit: "g/ton.mile" },
                            FuelRecord { fuel: "HFO-0.1", ghg: 16.73, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MDO",
                        fuels: &[
                            FuelRecord { fuel: "MDO-1.92", ghg: 15.76, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.5", ghg: 15.90, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MDO-0.1", ghg: 15.95, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MGO",
                        fuels: &[
                            FuelRecord { fuel: "MGO-1", ghg: 15.82, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.5", ghg: 15.88, unit: "g/ton.mile" },
                            FuelRecord { fuel: "MGO-0.1", ghg: 15.94, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "LNG",
                        fuels: &[
                            FuelRecord { fuel: "LNG", ghg: 15.55, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "FTD",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 18.25, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Coal", ghg: 20.74, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass-Natural-Gas", ghg: 11.80, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 0.92, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Renewable-Diesel",
                        fuels: &[
                            FuelRecord { fuel: "YG&HFO", ghg: 8.77, unit: "g/ton.mile" },
                            FuelRecord { fuel: "YG", ghg: 2.45, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "SVO",
                        fuels: &[
                            FuelRecord { fuel: "SVO", ghg: 2.35, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Bio-Oil",
                        fuels: &[
                            FuelRecord { fuel: "PO-WB", ghg: 1.26, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "Biodiesel",
                        fuels: &[
                            FuelRecord { fuel: "Biodiesel", ghg: 5.41, unit: "g/ton.mile" },
                        ],
                    },
                    EngineGroup {
                        engine: "MeOH",
                        fuels: &[
                            FuelRecord { fuel: "Natural-Gas", ghg: 22.60, unit: "g/ton.mile" },
                            FuelRecord { fuel: "FG", ghg: 1.27, unit: "g/ton.mile" },
                            FuelRecord { fuel: "RNG", ghg: -67.59, unit: "g/ton.mile" },
                            FuelRecord { fuel: "Biomass", ghg: 3.86, unit: "g/ton.mile" },
                        ],
                    },
                ],
            },
        ],
    },
];

// ============================================================================
// TESTS - Validate table shape against the source extraction
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_years_match_source() {
        let years: Vec<i32> = FORECAST.iter().map(|y| y.year).collect();
        assert_eq!(years, [2025, 2030, 2035, 2040, 2045, 2050]);
    }

    #[test]
    fn test_every_year_has_four_modes() {
        for year_table in FORECAST {
            let modes: Vec<&str> = year_table.modes.iter().map(|m| m.mode).collect();
            assert_eq!(
                modes,
                ["Long_Haul", "Short_Haul", "Rail", "Marine"],
                "unexpected modes in {}",
                year_table.year
            );
        }
    }

    /// Keys must be unique within their parent at every level.
    #[test]
    fn test_keys_unique_within_parent() {
        let mut years: Vec<i32> = FORECAST.iter().map(|y| y.year).collect();
        years.dedup();
        assert_eq!(years.len(), FORECAST.len());

        for year_table in FORECAST {
            let mut modes: Vec<&str> = year_table.modes.iter().map(|m| m.mode).collect();
            modes.sort_unstable();
            modes.dedup();
            assert_eq!(modes.len(), year_table.modes.len());

            for mode_group in year_table.modes {
                let mut engines: Vec<&str> =
                    mode_group.engines.iter().map(|e| e.engine).collect();
                engines.sort_unstable();
                engines.dedup();
                assert_eq!(engines.len(), mode_group.engines.len());

                for engine_group in mode_group.engines {
                    let mut fuels: Vec<&str> =
                        engine_group.fuels.iter().map(|f| f.fuel).collect();
                    fuels.sort_unstable();
                    fuels.dedup();
                    assert_eq!(
                        fuels.len(),
                        engine_group.fuels.len(),
                        "duplicate fuel under {} {} {}",
                        year_table.year,
                        mode_group.mode,
                        engine_group.engine
                    );
                }
            }
        }
    }

    /// Truck modes report per-mile factors, rail and marine per-ton-mile.
    #[test]
    fn test_units_are_mode_specific() {
        for year_table in FORECAST {
            for mode_group in year_table.modes {
                let expected = match mode_group.mode {
                    "Long_Haul" | "Short_Haul" => "g/mile",
                    _ => "g/ton.mile",
                };
                for engine_group in mode_group.engines {
                    for record in engine_group.fuels {
                        assert_eq!(
                            record.unit, expected,
                            "wrong unit for {} {} {}",
                            year_table.year, mode_group.mode, record.fuel
                        );
                    }
                }
            }
        }
    }

    /// 56 (mode, engine, fuel) rows per year, 336 in total.
    #[test]
    fn test_total_fuel_rows_match_source() {
        let total: usize = FORECAST
            .iter()
            .flat_map(|y| y.modes)
            .flat_map(|m| m.engines)
            .map(|e| e.fuels.len())
            .sum();
        assert_eq!(total, 336);
    }
}
