use std::{io::Cursor, path::PathBuf};

fn bin_path() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_duotile")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "duotile.exe"
            } else {
                "duotile"
            });
            p
        })
}

fn write_png(path: &std::path::Path, w: u32, h: u32, px: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, buf).unwrap();
}

#[test]
fn cli_combines_two_files_into_a_png() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let img1 = dir.join("img1.png");
    let img2 = dir.join("img2.png");
    let out = dir.join("out.png");
    let _ = std::fs::remove_file(&out);

    write_png(&img1, 100, 200, [255, 0, 0, 255]);
    write_png(&img2, 100, 100, [0, 0, 255, 255]);

    let status = std::process::Command::new(bin_path())
        .args([
            "--img1",
            img1.to_str().unwrap(),
            "--img2",
            img2.to_str().unwrap(),
            "--size",
            "512",
            "--out",
        ])
        .arg(out.to_str().unwrap())
        .status()
        .unwrap();

    assert!(status.success());
    let decoded = image::open(&out).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (512, 512));
}

#[test]
fn cli_rejects_sizes_outside_the_preset_list() {
    let status = std::process::Command::new(bin_path())
        .args(["--size", "513"])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn cli_dump_spec_needs_no_images() {
    let output = std::process::Command::new(bin_path())
        .args(["--layout", "overlay-hero", "--hero", "2", "--dump-spec"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("OverlayHero"));
}
