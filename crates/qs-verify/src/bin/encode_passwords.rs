// Regenerates the String.fromCharCode(...) literals used by the web app's
// password-validation tests. Output is pasted into the JS test fixtures,
// hence the JS-flavored format.

/// One fixture password per policy violation, plus two valid ones.
const FIXTURE_PASSWORDS: [&str; 7] = [
    "Ab1!",     // too short
    "abc1def!", // no uppercase
    "ABC1DEF!", // no lowercase
    "Abc!Defg", // no number
    "Abc1Defg", // no special
    "Abc1!Def", // valid 1
    "Xyz2@Wvu", // valid 2
];

fn from_char_code(password: &str) -> String {
    let codes: Vec<String> = password
        .chars()
        .map(|c| (c as u32).to_string())
        .collect();
    format!("String.fromCharCode({})", codes.join(", "))
}

fn main() {
    for password in FIXTURE_PASSWORDS {
        println!("// \"{password}\"\n{}", from_char_code(password));
    }
}
