//! Periodic table lookup.
//!
//! Standard atomic weights (IUPAC conventional values, 4-5 significant
//! digits). Elements without stable isotopes use the mass number of their
//! longest-lived isotope.

/// A chemical element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub atomic_weight: f64,
}

/// Elements 1-103 (H through Lr).
static ELEMENTS: [Element; 103] = [
    Element { atomic_number: 1, symbol: "H", atomic_weight: 1.008 },
    Element { atomic_number: 2, symbol: "He", atomic_weight: 4.0026 },
    Element { atomic_number: 3, symbol: "Li", atomic_weight: 6.94 },
    Element { atomic_number: 4, symbol: "Be", atomic_weight: 9.0122 },
    Element { atomic_number: 5, symbol: "B", atomic_weight: 10.81 },
    Element { atomic_number: 6, symbol: "C", atomic_weight: 12.011 },
    Element { atomic_number: 7, symbol: "N", atomic_weight: 14.007 },
    Element { atomic_number: 8, symbol: "O", atomic_weight: 15.999 },
    Element { atomic_number: 9, symbol: "F", atomic_weight: 18.998 },
    Element { atomic_number: 10, symbol: "Ne", atomic_weight: 20.180 },
    Element { atomic_number: 11, symbol: "Na", atomic_weight: 22.990 },
    Element { atomic_number: 12, symbol: "Mg", atomic_weight: 24.305 },
    Element { atomic_number: 13, symbol: "Al", atomic_weight: 26.982 },
    Element { atomic_number: 14, symbol: "Si", atomic_weight: 28.085 },
    Element { atomic_number: 15, symbol: "P", atomic_weight: 30.974 },
    Element { atomic_number: 16, symbol: "S", atomic_weight: 32.06 },
    Element { atomic_number: 17, symbol: "Cl", atomic_weight: 35.45 },
    Element { atomic_number: 18, symbol: "Ar", atomic_weight: 39.948 },
    Element { atomic_number: 19, symbol: "K", atomic_weight: 39.098 },
    Element { atomic_number: 20, symbol: "Ca", atomic_weight: 40.078 },
    Element { atomic_number: 21, symbol: "Sc", atomic_weight: 44.956 },
    Element { atomic_number: 22, symbol: "Ti", atomic_weight: 47.867 },
    Element { atomic_number: 23, symbol: "V", atomic_weight: 50.942 },
    Element { atomic_number: 24, symbol: "Cr", atomic_weight: 51.996 },
    Element { atomic_number: 25, symbol: "Mn", atomic_weight: 54.938 },
    Element { atomic_number: 26, symbol: "Fe", atomic_weight: 55.845 },
    Element { atomic_number: 27, symbol: "Co", atomic_weight: 58.933 },
    Element { atomic_number: 28, symbol: "Ni", atomic_weight: 58.693 },
    Element { atomic_number: 29, symbol: "Cu", atomic_weight: 63.546 },
    Element { atomic_number: 30, symbol: "Zn", atomic_weight: 65.38 },
    Element { atomic_number: 31, symbol: "Ga", atomic_weight: 69.723 },
    Element { atomic_number: 32, symbol: "Ge", atomic_weight: 72.630 },
    Element { atomic_number: 33, symbol: "As", atomic_weight: 74.922 },
    Element { atomic_number: 34, symbol: "Se", atomic_weight: 78.971 },
    Element { atomic_number: 35, symbol: "Br", atomic_weight: 79.904 },
    Element { atomic_number: 36, symbol: "Kr", atomic_weight: 83.798 },
    Element { atomic_number: 37, symbol: "Rb", atomic_weight: 85.468 },
    Element { atomic_number: 38, symbol: "Sr", atomic_weight: 87.62 },
    Element { atomic_number: 39, symbol: "Y", atomic_weight: 88.906 },
    Element { atomic_number: 40, symbol: "Zr", atomic_weight: 91.224 },
    Element { atomic_number: 41, symbol: "Nb", atomic_weight: 92.906 },
    Element { atomic_number: 42, symbol: "Mo", atomic_weight: 95.95 },
    Element { atomic_number: 43, symbol: "Tc", atomic_weight: 98.0 },
    Element { atomic_number: 44, symbol: "Ru", atomic_weight: 101.07 },
    Element { atomic_number: 45, symbol: "Rh", atomic_weight: 102.91 },
    Element { atomic_number: 46, symbol: "Pd", atomic_weight: 106.42 },
    Element { atomic_number: 47, symbol: "Ag", atomic_weight: 107.87 },
    Element { atomic_number: 48, symbol: "Cd", atomic_weight: 112.41 },
    Element { atomic_number: 49, symbol: "In", atomic_weight: 114.82 },
    Element { atomic_number: 50, symbol: "Sn", atomic_weight: 118.71 },
    Element { atomic_number: 51, symbol: "Sb", atomic_weight: 121.76 },
    Element { atomic_number: 52, symbol: "Te", atomic_weight: 127.60 },
    Element { atomic_number: 53, symbol: "I", atomic_weight: 126.90 },
    Element { atomic_number: 54, symbol: "Xe", atomic_weight: 131.29 },
    Element { atomic_number: 55, symbol: "Cs", atomic_weight: 132.91 },
    Element { atomic_number: 56, symbol: "Ba", atomic_weight: 137.33 },
    Element { atomic_number: 57, symbol: "La", atomic_weight: 138.91 },
    Element { atomic_number: 58, symbol: "Ce", atomic_weight: 140.12 },
    Element { atomic_number: 59, symbol: "Pr", atomic_weight: 140.91 },
    Element { atomic_number: 60, symbol: "Nd", atomic_weight: 144.24 },
    Element { atomic_number: 61, symbol: "Pm", atomic_weight: 145.0 },
    Element { atomic_number: 62, symbol: "Sm", atomic_weight: 150.36 },
    Element { atomic_number: 63, symbol: "Eu", atomic_weight: 151.96 },
    Element { atomic_number: 64, symbol: "Gd", atomic_weight: 157.25 },
    Element { atomic_number: 65, symbol: "Tb", atomic_weight: 158.93 },
    Element { atomic_number: 66, symbol: "Dy", atomic_weight: 162.50 },
    Element { atomic_number: 67, symbol: "Ho", atomic_weight: 164.93 },
    Element { atomic_number: 68, symbol: "Er", atomic_weight: 167.26 },
    Element { atomic_number: 69, symbol: "Tm", atomic_weight: 168.93 },
    Element { atomic_number: 70, symbol: "Yb", atomic_weight: 173.05 },
    Element { atomic_number: 71, symbol: "Lu", atomic_weight: 174.97 },
    Element { atomic_number: 72, symbol: "Hf", atomic_weight: 178.49 },
    Element { atomic_number: 73, symbol: "Ta", atomic_weight: 180.95 },
    Element { atomic_number: 74, symbol: "W", atomic_weight: 183.84 },
    Element { atomic_number: 75, symbol: "Re", atomic_weight: 186.21 },
    Element { atomic_number: 76, symbol: "Os", atomic_weight: 190.23 },
    Element { atomic_number: 77, symbol: "Ir", atomic_weight: 192.22 },
    Element { atomic_number: 78, symbol: "Pt", atomic_weight: 195.08 },
    Element { atomic_number: 79, symbol: "Au", atomic_weight: 196.97 },
    Element { atomic_number: 80, symbol: "Hg", atomic_weight: 200.59 },
    Element { atomic_number: 81, symbol: "Tl", atomic_weight: 204.38 },
    Element { atomic_number: 82, symbol: "Pb", atomic_weight: 207.2 },
    Element { atomic_number: 83, symbol: "Bi", atomic_weight: 208.98 },
    Element { atomic_number: 84, symbol: "Po", atomic_weight: 209.0 },
    Element { atomic_number: 85, symbol: "At", atomic_weight: 210.0 },
    Element { atomic_number: 86, symbol: "Rn", atomic_weight: 222.0 },
    Element { atomic_number: 87, symbol: "Fr", atomic_weight: 223.0 },
    Element { atomic_number: 88, symbol: "Ra", atomic_weight: 226.0 },
    Element { atomic_number: 89, symbol: "Ac", atomic_weight: 227.0 },
    Element { atomic_number: 90, symbol: "Th", atomic_weight: 232.04 },
    Element { atomic_number: 91, symbol: "Pa", atomic_weight: 231.04 },
    Element { atomic_number: 92, symbol: "U", atomic_weight: 238.03 },
    Element { atomic_number: 93, symbol: "Np", atomic_weight: 237.0 },
    Element { atomic_number: 94, symbol: "Pu", atomic_weight: 244.0 },
    Element { atomic_number: 95, symbol: "Am", atomic_weight: 243.0 },
    Element { atomic_number: 96, symbol: "Cm", atomic_weight: 247.0 },
    Element { atomic_number: 97, symbol: "Bk", atomic_weight: 247.0 },
    Element { atomic_number: 98, symbol: "Cf", atomic_weight: 251.0 },
    Element { atomic_number: 99, symbol: "Es", atomic_weight: 252.0 },
    Element { atomic_number: 100, symbol: "Fm", atomic_weight: 257.0 },
    Element { atomic_number: 101, symbol: "Md", atomic_weight: 258.0 },
    Element { atomic_number: 102, symbol: "No", atomic_weight: 259.0 },
    Element { atomic_number: 103, symbol: "Lr", atomic_weight: 266.0 },
];

/// Look up an element by its symbol (case sensitive, e.g. "C", "Cl").
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    ELEMENTS.iter().find(|e| e.symbol == symbol)
}
