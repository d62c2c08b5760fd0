fn main() -> palette_suggest::Result<()> {
    palette_suggest::run(wild::args_os())
}
