// Charter
// Copyright (C) 2020 The Charter developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use structopt::StructOpt;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let command_line = charter_cli::CommandLine::from_args();
    if let Err(error) = command_line.run().await {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
