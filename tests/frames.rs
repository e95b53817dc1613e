use sky_almanac::core::{Matrix, RectangularVector, Vector};
use sky_almanac::frames::nutation::nutation_angles;
use sky_almanac::frames::obliquity::mean_obliquity;
use sky_almanac::frames::precession::precession_matrix;
use sky_almanac::frames::{
    EclipticToEquatorialElements, FrameError, ModelKind, NutationElements, NutationModel,
    ObliquityModel, PrecessionElements, PrecessionModel,
};

#[test]
fn mean_obliquity_matches_reference_values() {
    let cases = [
        (ObliquityModel::Williams1994, 0.0, 0.409_092_601_439_310_53),
        (ObliquityModel::Williams1994, 0.5, 0.408_979_073_715_669_94),
        (ObliquityModel::Williams1994, 10.0, 0.406_831_595_884_176_83),
        (ObliquityModel::Simon1994, 0.0, 0.409_092_629_689_403_7),
        (ObliquityModel::Simon1994, 10.0, 0.406_832_832_289_963_3),
        (ObliquityModel::Laskar1996, 0.0, 0.409_092_804_222_328_97),
        (ObliquityModel::Iau1976, 0.0, 0.409_092_804_222_328_97),
        (ObliquityModel::Iau2006, 10.0, 0.406_831_464_983_286_76),
        (ObliquityModel::Vondrak2011, 10.0, 0.406_831_415_806_007_3),
    ];
    for (model, jt, expected) in cases {
        let eps = mean_obliquity(model, jt);
        assert!(
            (eps - expected).abs() < 1e-9,
            "{model} at JT {jt}: {eps} vs {expected}"
        );
    }
}

#[test]
fn iau1980_nutation_matches_reference_values() {
    let cases = [
        (0.0, -6.750_247_617_532_478e-5, -2.799_221_238_377_013_6e-5),
        (-0.5, -1.602_570_541_677_162_3e-5, 4.031_770_174_572_796e-5),
        (10.0, 6.179_874_108_902_156e-5, -3.468_044_616_721_48e-5),
    ];
    for (jt, dpsi, deps) in cases {
        let angles = nutation_angles(NutationModel::Iau1980, jt);
        assert!((angles.longitude - dpsi).abs() < 1e-12, "Δψ at {jt}: {}", angles.longitude);
        assert!((angles.obliquity - deps).abs() < 1e-12, "Δε at {jt}: {}", angles.obliquity);
    }
}

#[test]
fn iau2000_nutation_matches_reference_values() {
    let cases = [
        (0.0, -6.754_422_426_417_299e-5, -2.797_083_119_237_414_3e-5),
        (-0.5, -1.601_424_665_756_601e-5, 4.035_162_305_736_675_4e-5),
    ];
    for (jt, dpsi, deps) in cases {
        let angles = nutation_angles(NutationModel::Iau2000, jt);
        assert!((angles.longitude - dpsi).abs() < 2.5e-8, "Δψ at {jt}: {}", angles.longitude);
        assert!((angles.obliquity - deps).abs() < 2.5e-8, "Δε at {jt}: {}", angles.obliquity);
    }
}

#[test]
fn iau2006_nutation_is_a_scaled_iau2000() {
    let base = nutation_angles(NutationModel::Iau2000, 0.0);
    let scaled = nutation_angles(NutationModel::Iau2006, 0.0);
    assert!((scaled.longitude / base.longitude - 1.0 - 0.4697e-6).abs() < 1e-12);
    assert!((scaled.obliquity - base.obliquity).abs() < 1e-15);
}

#[test]
fn precession_is_identity_at_j2000() {
    for model in PrecessionModel::ALL {
        let m = precession_matrix(model, 0.0);
        assert!(
            m.max_abs_diff(&Matrix::IDENTITY) < 1e-9,
            "{model} precession at J2000 deviates by {}",
            m.max_abs_diff(&Matrix::IDENTITY)
        );
    }
}

#[test]
fn precession_matrices_are_orthonormal_and_invertible() {
    let v = Vector::Rectangular(RectangularVector::new(0.3, -0.8, 0.52));
    for model in PrecessionModel::ALL {
        let elements = PrecessionElements::new(model, 0.37);
        let m = elements.from_j2000;
        assert!((m * m.transpose()).max_abs_diff(&Matrix::IDENTITY) < 1e-12, "{model}");
        let back = elements
            .transform_to_j2000(elements.transform_from_j2000(v))
            .to_rectangular();
        let original = v.to_rectangular();
        assert!((back - original).norm() < 1e-12, "{model} round trip");
    }
}

#[test]
fn composed_transforms_agree_across_models() {
    let reference = EclipticToEquatorialElements::new(PrecessionModel::Iau2006, 0.2).matrix();
    for model in PrecessionModel::ALL {
        let m = EclipticToEquatorialElements::new(model, 0.2).matrix();
        let diff = m.max_abs_diff(&reference);
        assert!(diff < 2e-5, "{model} differs from IAU2006 by {diff}");
    }
}

#[test]
fn ecliptic_pole_lands_at_eighteen_hours() {
    let elements = EclipticToEquatorialElements::new(PrecessionModel::Iau1976, 0.0);
    let pole = elements.transform(Vector::Rectangular(RectangularVector::new(0.0, 0.0, 1.0)));
    let eps = elements.obliquity.obliquity;
    assert!(pole.x.abs() < 1e-3, "x {}", pole.x);
    assert!((pole.y + eps.sin()).abs() < 1e-3, "y {}", pole.y);
    assert!((pole.z - eps.cos()).abs() < 1e-3, "z {}", pole.z);
}

#[test]
fn true_ecliptic_undoes_obliquity_rotation() {
    let elements = EclipticToEquatorialElements::new(PrecessionModel::Iau2000, 0.18);
    let eq = elements.transform(Vector::Rectangular(RectangularVector::new(1.0, 0.0, 0.0)));
    let ecl = elements.equatorial_to_true_ecliptic(Vector::Rectangular(eq));
    assert!(ecl.z.abs() < 1e-4, "latitude residual {}", ecl.z);
    assert!((elements.true_obliquity() - elements.obliquity.obliquity).abs() < 1e-4);
}

#[test]
fn nutation_without_obliquity_has_no_equatorial_form() {
    let elements = NutationElements::new(NutationModel::Iau1980, 0.1, None);
    let v = Vector::Rectangular(RectangularVector::new(1.0, 0.0, 0.0));
    assert!(elements.apply_to_equatorial(v).is_none());
    let nutated = elements.apply_to_ecliptic(v);
    let back = elements.remove_from_ecliptic(nutated).to_rectangular();
    assert!((back - v.to_rectangular()).norm() < 1e-12);
}

#[test]
fn model_identifiers_parse_and_reject() {
    assert_eq!("iau-2006".parse::<PrecessionModel>(), Ok(PrecessionModel::Iau2006));
    assert_eq!("vondrak_2011".parse::<PrecessionModel>(), Ok(PrecessionModel::Vondrak2011));
    assert_eq!(PrecessionModel::try_from(9), Ok(PrecessionModel::Vondrak2011));
    assert_eq!(NutationModel::try_from(3), Ok(NutationModel::Iau2000));
    assert_eq!(
        PrecessionModel::try_from(10),
        Err(FrameError::OutOfRange {
            kind: ModelKind::Precession,
            id: "10".to_string(),
        })
    );
    assert!(ObliquityModel::try_from(0).is_err());
    assert!(NutationModel::try_from(1).is_err());
    assert!("bogus".parse::<PrecessionModel>().is_err());

    for model in PrecessionModel::ALL {
        assert_eq!(PrecessionModel::try_from(model.id()), Ok(model));
        assert_eq!(model.name().parse::<PrecessionModel>(), Ok(model));
    }
}
