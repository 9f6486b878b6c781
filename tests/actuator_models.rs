// tests/actuator_models.rs
use wheel_chassis::{ActuatorModel, Chassis, ChassisParameters, build_actuator_models};

#[test]
fn test_single_shared_wheel_descriptor() {
    let params = ChassisParameters {
        wheel_gear_ratio: 19.0,
        motor_kt: 0.02,
        motor_r: 0.2,
        battery_v: 24.0,
        joint_damping: 0.05,
        joint_dry_friction: 0.3,
        motor_tau_max: 0.18,
        ..Default::default()
    };

    let models = Chassis::new(params).build_actuator_models();

    assert_eq!(models.len(), 1, "one descriptor shared by all wheels");
    assert_eq!(
        models[0],
        ActuatorModel {
            gear_ratio: 19.0,
            motor_kt: 0.02,
            motor_r: 0.2,
            battery_v: 24.0,
            damping: 0.05,
            dry_friction: 0.3,
            tau_max: 0.18,
        }
    );
}

#[test]
fn test_actuator_models_are_deterministic() {
    let params = ChassisParameters::default();
    let first = build_actuator_models(&params);
    let second = build_actuator_models(&params);
    assert_eq!(first, second);
}

#[test]
fn test_gear_ratio_tracks_wheel_gearing_only() {
    // The suspension reduction is fixed and never appears in the actuator list.
    let params = ChassisParameters {
        wheel_gear_ratio: 3.7,
        ..Default::default()
    };
    let models = build_actuator_models(&params);
    assert_eq!(models[0].gear_ratio, 3.7);
}
