use code128b::Code128Builder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let barcode = Code128Builder::new("Hello, World!").density(2).build()?;
    println!("{}", barcode.to_str()?);

    let img = barcode.to_image()?;
    img.save("code128.png")?;
    println!("Saved {}x{} barcode to code128.png", img.width(), img.height());

    Ok(())
}
