use crate::frame::{Frame, FrameError};
use ndarray::Array3;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0} has no usable file name after sanitizing")]
    EmptyFileName(PathBuf),

    #[error("{path} is an invalid image filename, must be a three-channel image: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{path} is not a usable image: {source}")]
    Frame { path: PathBuf, source: FrameError },
}

// Keeps only letters, digits, '.' and '_'.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '.' | '_'))
        .collect()
}

/// Sanitizes the file-name component of `path`, leaving its directory alone.
pub fn sanitize_path(path: &Path) -> Result<PathBuf, InputError> {
    let name = path
        .file_name()
        .map(|name| sanitize_filename(&name.to_string_lossy()))
        .unwrap_or_default();

    // "." and ".." survive the filter but do not name a file.
    if name.is_empty() || name.chars().all(|c| c == '.') {
        return Err(InputError::EmptyFileName(path.to_path_buf()));
    }

    Ok(match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    })
}

/// Reads an image from disk as a (height, width, 3) BGR array.
pub fn load_bgr_image(path: &Path) -> Result<Array3<u8>, InputError> {
    let decoded = image::open(path).map_err(|source| InputError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let frame_err = |source| InputError::Frame {
        path: path.to_path_buf(),
        source,
    };
    let frame = Frame::from_dynamic_image(decoded).map_err(frame_err)?;
    tracing::debug!(
        path = %path.display(),
        width = frame.width,
        height = frame.height,
        "decoded image"
    );

    frame.to_bgr8().into_array().map_err(frame_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_unsafe_characters() {
        assert_eq!(sanitize_filename("lane.jpg"), "lane.jpg");
        assert_eq!(sanitize_filename("my lane (1).jpg"), "mylane1.jpg");
        assert_eq!(sanitize_filename("x;rm -rf;.png"), "xrmrf.png");
        assert_eq!(sanitize_filename("snake_case-name.png"), "snake_casename.png");
    }

    #[test]
    fn sanitize_path_keeps_directory() {
        let path = sanitize_path(Path::new("images/lane 2.jpg")).unwrap();
        assert_eq!(path, PathBuf::from("images/lane2.jpg"));

        let path = sanitize_path(Path::new("lane.jpg")).unwrap();
        assert_eq!(path, PathBuf::from("lane.jpg"));
    }

    #[test]
    fn sanitize_path_rejects_empty_names() {
        assert!(matches!(
            sanitize_path(Path::new("dir/***")),
            Err(InputError::EmptyFileName(_))
        ));
        assert!(sanitize_path(Path::new("")).is_err());
        assert!(sanitize_path(Path::new("..")).is_err());
    }

    #[test]
    fn load_reorders_to_bgr() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 1, 2, 3])
            .unwrap()
            .save(&path)
            .unwrap();

        let bgr = load_bgr_image(&path).unwrap();
        assert_eq!(bgr.dim(), (1, 2, 3));
        assert_eq!(bgr.as_slice().unwrap(), &[0, 0, 255, 3, 2, 1]);
    }

    #[test]
    fn grayscale_files_are_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_raw(1, 1, vec![42])
            .unwrap()
            .save(&path)
            .unwrap();

        let bgr = load_bgr_image(&path).unwrap();
        assert_eq!(bgr.as_slice().unwrap(), &[42, 42, 42]);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_bgr_image(Path::new("no_such_image.png")).unwrap_err();
        assert!(matches!(err, InputError::Decode { .. }));
        assert!(err.to_string().contains("no_such_image.png"));
    }
}
