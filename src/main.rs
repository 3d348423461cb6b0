use std::error::Error;
use std::path::PathBuf;

use structopt::StructOpt;
use tracing::info;

use softrast::math::vec3::Vec3;
use softrast::raymarch::{render_scene, tank_scene};
use softrast::{render_mesh_into, Camera, Framebuffer, Model};

#[derive(Debug, StructOpt)]
#[structopt(name = "softrast", rename_all = "kebab-case")]
struct Opt {
    /// OBJ model to render (a `<stem>_diffuse.tga` texture is picked up
    /// automatically if present).
    #[structopt(long, default_value = "obj/head.obj")]
    model: PathBuf,

    /// Output TGA path.
    #[structopt(short, long, default_value = "output.tga")]
    output: PathBuf,

    /// Framebuffer width and height in pixels.
    #[structopt(long, default_value = "1000")]
    size: u32,

    /// Also sphere-trace the tank scene into the frame.
    #[structopt(long)]
    tank: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    let opt = Opt::from_args();

    let model = Model::from_obj(&opt.model)?;
    let camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::UP);
    let light_dir = Vec3::new(0.0, 0.0, -1.0);

    let mut fb = Framebuffer::new(opt.size, opt.size);
    render_mesh_into(&model, &camera, light_dir, &mut fb);

    if opt.tank {
        render_scene(&tank_scene(), &mut fb, Vec3::new(1.0, 1.0, -5.0), (0, 400), 600);
    }

    fb.save_tga(&opt.output)?;
    info!(path = %opt.output.display(), "wrote render");
    Ok(())
}
