//! Model constants for a typical C-segment vehicle.

/// Cabin overall heat transfer coefficient (kW per degC of ambient-to-cabin
/// temperature difference).
pub const UA_CABIN_KW_PER_C: f64 = 0.16;

/// Base solar load before the ambient scaling factor (kW).
pub const SOLAR_LOAD_BASE_KW: f64 = 0.6;

/// Metabolic load per occupant (kW).
pub const PASSENGER_LOAD_KW: f64 = 0.15;

/// Occupants assumed for the steady-state load.
pub const PASSENGER_COUNT: f64 = 2.0;

/// Belt/clutch drive train efficiency between shaft and compressor.
pub const MECHANICAL_EFFICIENCY: f64 = 0.90;

/// Swept volume per revolution at full stroke (m^3).
pub const COMPRESSOR_DISPLACEMENT_M3: f64 = 150.0e-6;

/// Volumetric efficiency at the suction port.
pub const VOLUMETRIC_EFFICIENCY: f64 = 0.70;

/// Approximate refrigerant density at suction conditions (kg/m^3).
pub const SUCTION_DENSITY_KG_M3: f64 = 15.0;

/// Approximate evaporator enthalpy change (kJ/kg).
pub const ENTHALPY_DELTA_KJ_KG: f64 = 180.0;

/// Average brake-specific fuel consumption (g/kWh).
pub const BSFC_AVG_G_PER_KWH: f64 = 280.0;

/// Gasoline density (g/L).
pub const FUEL_DENSITY_G_PER_L: f64 = 740.0;

/// Evaporating temperature, held constant (degC). A modeling
/// simplification, not a solved quantity.
pub const T_EVAP_C: f64 = 3.0;

/// Effective engine speed floor (RPM); avoids the torque singularity.
pub const RPM_FLOOR: f64 = 600.0;

/// Lumped cabin thermal mass used by the pull-down integrator.
pub const CABIN_THERMAL_MASS: f64 = 150.0;

/// Ambient temperature above which the condenser saturates (degC).
pub const CONDENSER_SATURATION_C: f64 = 45.0;

/// Ambient temperature above which the system is cut off (degC).
pub const CUT_OFF_AMBIENT_C: f64 = 52.0;
