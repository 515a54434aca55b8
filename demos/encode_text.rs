use huffcode::Workbench;

fn main() {
    let text = "what a lovely day for a walk";

    let mut bench = Workbench::new();
    let bits = bench.encode(text).unwrap();

    println!("text:    {text}");
    println!("bits:    {bits}");
    println!("decoded: {}", bench.decode(&bits));
    println!();
    println!("{}", bench.render());
}
