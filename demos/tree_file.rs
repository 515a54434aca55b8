use std::env;
use std::fs;

use huffcode::{PortableCodeTable, Workbench};

fn main() {
    let fp = env::args()
        .nth(1)
        .expect("Please provide path to input file as first argument.");

    let text = fs::read_to_string(fp).expect("First argument was not a valid filepath.");

    // encode scope - build the tree, save its records, pack its codes
    {
        let mut bench = Workbench::new();
        let bits = bench.encode(&text).unwrap();
        println!("{} characters -> {} bits", text.chars().count(), bits.len());

        bench.save_tree("tree.txt").unwrap();

        let table = bench.current_tree().unwrap().code_table();
        let packed = rmp_serde::to_vec(&PortableCodeTable::from(&table)).unwrap();
        fs::write("codes.mp", packed).unwrap();
    }

    // reload scope - recover the letter frequencies from the records
    {
        let mut bench = Workbench::new();
        let letters = bench.load_frequencies("tree.txt").unwrap();
        print!("letters recovered from tree.txt:\n{letters}");

        let tree = bench.load_tree("tree.txt").unwrap();
        println!("rebuilt a {}-node tree from those letters", tree.num_nodes());
    }
}
