use clap::Parser;
use cspace_detection::Colorspace;
use std::path::PathBuf;

/// Color threshold an image in any colorspace and save the mask to a file.
#[derive(Parser, Debug)]
#[command(
    name = "cspace-thresh",
    version,
    about,
    long_about = None,
    after_help = "Example: cspace-thresh lane.jpg HSV 0 16 21 72 78 100"
)]
pub struct Args {
    /// Image to threshold; the file name is sanitized before reading
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Colorspace: BGR, HSV, HLS, Lab, Luv, YCrCb, XYZ or Grayscale
    #[arg(value_name = "CSPACE")]
    pub cspace: Colorspace,

    /// Slider positions 0-100: ch1 min, ch1 max, ch2 min, ch2 max, ch3 min, ch3 max
    #[arg(value_name = "SLIDER", required = true, num_args = 1.., allow_negative_numbers = true)]
    pub sliders: Vec<i32>,

    /// Where to write the mask (defaults to the configured output path)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to config/default.toml)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_classic_invocation() {
        let args =
            Args::try_parse_from(["cspace-thresh", "lane.jpg", "HSV", "0", "16", "21", "72", "78", "100"])
                .unwrap();
        assert_eq!(args.image, PathBuf::from("lane.jpg"));
        assert_eq!(args.cspace, Colorspace::Hsv);
        assert_eq!(args.sliders, vec![0, 16, 21, 72, 78, 100]);
        assert!(args.output.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn accepts_negative_sliders() {
        let args =
            Args::try_parse_from(["cspace-thresh", "a.png", "Lab", "-5", "100", "0", "100", "0", "100"])
                .unwrap();
        assert_eq!(args.sliders[0], -5);
    }

    #[test]
    fn rejects_unknown_colorspace() {
        let err = Args::try_parse_from(["cspace-thresh", "a.png", "foo", "0", "1", "2", "3", "4", "5"])
            .unwrap_err();
        assert!(err.to_string().contains("foo is an invalid colorspace"));
    }

    #[test]
    fn options() {
        let args = Args::try_parse_from([
            "cspace-thresh",
            "-o",
            "mask.png",
            "--config",
            "custom.toml",
            "a.png",
            "Grayscale",
            "0",
            "50",
            "0",
            "0",
            "0",
            "0",
        ])
        .unwrap();
        assert_eq!(args.output, Some(PathBuf::from("mask.png")));
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }
}
