//! Basic image implementation with saving

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use super::color::Color;

#[derive(Clone, Debug, PartialEq)]
/// Generic image struct. Usage of the word `pixel` in this documentation refers to an instance of
/// the stored data type.
pub struct Image<T> {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Pixels in row-major order, top row first
    pub pixels: Vec<T>,
}

impl<T: Clone> Image<T> {
    /// Create an image from a pixel width and height and a default value
    pub fn new(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; (width * height) as usize],
        }
    }

    /// Get a pixel at x/y coordinates, if inside the image
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels.get((y * self.width + x) as usize)
    }

    /// Set a pixel at x/y coordinates
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        self.pixels[(y * self.width + x) as usize] = value;
    }
}

impl Image<Color> {
    /// Serialize as a binary PPM (P6), clamping every component to `[0, 1]` first.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "P6\n{} {}\n{}\n", self.width, self.height, u8::MAX)?;

        for pixel in &self.pixels {
            writer.write_all(&pixel.as_bytes())?;
        }

        writer.flush()
    }

    /// Save current state as a .ppm according to the path given as argument
    pub fn save_as_ppm(&self, path: &Path) -> io::Result<()> {
        self.write_ppm(BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn get_and_set() {
        let mut image = Image::new(10, 5, 0);
        image.set(3, 4, 7);

        assert_eq!(image.get(3, 4), Some(&7));
        assert_eq!(image.pixels[4 * 10 + 3], 7);
        assert_eq!(image.get(0, 0), Some(&0));
        assert_eq!(image.get(10, 0), None);
        assert_eq!(image.get(0, 5), None);
    }

    #[test]
    fn ppm_header_and_clamping() {
        let mut image = Image::new(2, 1, Color::BLACK);
        image.set(0, 0, Color::new(1.5, 0.5, -0.5));
        image.set(1, 0, Color::new(0., 1., 0.));

        let mut bytes = Vec::new();
        image.write_ppm(&mut bytes).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[255, 127, 0, 0, 255, 0]);
    }

    #[test]
    fn rows_written_top_first() {
        let mut image = Image::new(1, 2, Color::BLACK);
        image.set(0, 0, Color::WHITE);

        let mut bytes = Vec::new();
        image.write_ppm(&mut bytes).unwrap();

        assert_eq!(&bytes[bytes.len() - 6..], &[255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn save_image_as_ppm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradient.ppm");

        let (width, height) = (64, 32);
        let mut image = Image::new(width, height, Color::BLACK);
        for y in 0..height {
            for x in 0..width {
                image.set(
                    x,
                    y,
                    Color::new(x as f64 / width as f64, 1. - y as f64 / height as f64, 0.),
                );
            }
        }

        image.save_as_ppm(&path).unwrap();

        let written = std::fs::read(&path).unwrap();
        let header = format!("P6\n{width} {height}\n255\n");
        assert!(written.starts_with(header.as_bytes()));
        assert_eq!(written.len(), header.len() + (width * height * 3) as usize);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();

        let res = Image::new(1, 1, Color::WHITE).save_as_ppm(&dir.path().join("nope/out.ppm"));

        assert!(res.is_err());
    }
}
