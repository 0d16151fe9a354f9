use error_chain::*;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        InvalidDimension(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: width and height must both be at least 1",
                    width, height)
        }
        Cancelled {
            description("maze generation cancelled")
            display("maze generation cancelled through its cancel token")
        }
    }
}
