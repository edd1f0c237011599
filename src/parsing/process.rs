pub fn process(input: &str) -> String {
    // Normalize line endings so columns never count a stray '\r'
    let mut input = input.replace("\r\n", "\n").replace('\r', "\n");

    // Remove trailing newline
    if input.ends_with('\n') {
        input.pop();
    }

    input
}
