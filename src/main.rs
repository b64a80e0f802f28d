use std::error::Error;

use clap::Parser;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use hitcore::hittable::Hittable;
use hitcore::interval::Interval;
use hitcore::ray::Ray;
use hitcore::scene::load_scene;
use logger::init_logger;

/// Load the scene, cast the ray and format the nearest hit (or `no hit`).
fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    // Reject degenerate rays before touching the scene
    let ray = Ray::new(args.origin, args.direction);
    if ray.is_degenerate() {
        return Err("Ray direction must have non-zero length".into());
    }
    let ray_t = Interval::new(args.t_min, args.t_max);

    let world = load_scene(&args.scene)?;

    info!(
        "Casting ray from {} along {} over ({}, {})",
        ray.origin, ray.direction, ray_t.min, ray_t.max
    );

    let report = match world.hit(&ray, ray_t) {
        Some(rec) => format!(
            "t          {}\npoint      {}\nnormal     {}\nfront face {}\nmaterial   {:?}\n",
            rec.t, rec.p, rec.normal, rec.front_face, rec.material
        ),
        None => "no hit\n".to_string(),
    };
    Ok(report)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("hitcore - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(report) => print!("{}", report),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/scenes/three_spheres.json");

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["hitcore", "--scene", SCENE];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn default_ray_reports_center_sphere() {
        let report = run(&args(&[])).unwrap();
        assert!(report.starts_with("t          0.5\n"), "{}", report);
        assert!(report.contains("front face true"));
        assert!(report.contains("Lambertian"));
    }

    #[test]
    fn ray_into_empty_sky_reports_no_hit() {
        let report = run(&args(&["--direction", "0,1,0"])).unwrap();
        assert_eq!(report, "no hit\n");
    }

    #[test]
    fn far_bound_before_first_surface_reports_no_hit() {
        let report = run(&args(&["--t-max", "0.4"])).unwrap();
        assert_eq!(report, "no hit\n");
    }

    #[test]
    fn zero_direction_is_rejected() {
        let err = run(&args(&["--direction", "0,0,0"])).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn zero_direction_is_rejected_before_loading_scene() {
        let a = Args::try_parse_from([
            "hitcore",
            "--scene",
            "scenes/does_not_exist.json",
            "--direction",
            "0,0,0",
        ])
        .unwrap();
        let err = run(&a).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn missing_scene_is_an_error() {
        let a = Args::try_parse_from(["hitcore", "--scene", "scenes/does_not_exist.json"]).unwrap();
        let err = run(&a).unwrap_err();
        assert!(err.to_string().contains("does_not_exist"));
    }
}
