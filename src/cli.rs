use clap::{value_parser, crate_version, Arg, ArgAction, Command, ValueHint};

const IN_HELP: &str = "if disk image is piped, omit `--dimg` option";
const SORT_LONG_HELP: &str = "Order of the directory entries.
`slot` keeps the order of the directory slots, `start` sorts by starting block.
Entries with the same starting block stay in slot order.";
const ORDER_HELP: &str = "images with the `po` extension are read in ProDOS order,
all others are read in DOS 3.3 order";

fn dimg_arg(req: bool) -> Arg {
    Arg::new("dimg").short('d').long("dimg").help("path to disk image itself")
        .value_name("PATH")
        .value_hint(ValueHint::FilePath)
        .required(req)
}

fn indent_arg() -> Arg {
    Arg::new("indent").long("indent").help("JSON indentation, omit to minify")
        .value_name("SPACES")
        .value_parser(value_parser!(u16).range(0..16))
        .required(false)
}

fn backup_arg() -> Arg {
    Arg::new("backup").long("backup").help("use the backup directory")
        .action(ArgAction::SetTrue)
        .long_help("read the backup copy of the directory (blocks 13-16) rather than the primary copy (blocks 9-12)")
}

fn sort_arg() -> Arg {
    Arg::new("sort").long("sort").help("order of directory entries")
        .value_name("ORDER")
        .value_parser(["slot","start"])
        .default_value("slot")
        .long_help(SORT_LONG_HELP)
}

pub fn build_cli() -> Command {
    let long_help = "a2apex is always invoked with exactly one of several subcommands.
The subcommands read Apple II disk images that use the Apex file system.
Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
list files:            `a2apex catalog -d apex.dsk`
extract all files:     `a2apex extract -d apex.dsk -o ./files`
one file to stdout:    `a2apex get -f hello.txt -d apex.dsk`
inspect a block:       `a2apex dump -b 9 -d apex.dsk`
piped image:           `cat apex.dsk | a2apex catalog`";

    let mut main_cmd = Command::new("a2apex")
        .about("Extracts files from Apple II disk images that use the Apex file system.")
        .after_long_help(long_help)
        .version(crate_version!());

    main_cmd = main_cmd.subcommand(
        Command::new("catalog")
            .arg(dimg_arg(false))
            .arg(backup_arg())
            .arg(sort_arg())
            .visible_alias("ls")
            .visible_alias("dir")
            .visible_alias("cat")
            .about("write disk image catalog to stdout")
            .after_help([IN_HELP,"\n\n",ORDER_HELP].concat())
    );
    main_cmd = main_cmd.subcommand(
        Command::new("tree")
            .arg(dimg_arg(false))
            .arg(backup_arg())
            .arg(sort_arg())
            .arg(indent_arg())
            .about("write directory and volume information as a JSON string to stdout")
            .after_help(IN_HELP)
    );
    main_cmd = main_cmd.subcommand(
        Command::new("get")
            .arg(Arg::new("file").short('f').long("file").help("name of the file inside the disk image")
                .value_name("NAME")
                .required(true)
                .long_help("the name can be given as in the catalog, e.g. `HELLO   .TXT`, or as on the host, e.g. `hello.txt`"))
            .arg(dimg_arg(false))
            .arg(backup_arg())
            .about("read a file from the disk image, write to stdout")
            .after_help([IN_HELP,"\n\n","binary files are shown as a hex dump if stdout is the console"].concat())
    );
    main_cmd = main_cmd.subcommand(
        Command::new("extract")
            .arg(dimg_arg(false))
            .arg(Arg::new("output").short('o').long("output").help("directory where files are written")
                .value_name("DIR")
                .value_hint(ValueHint::DirPath)
                .default_value("."))
            .arg(backup_arg())
            .arg(sort_arg())
            .about("write every file in the disk image to a host directory")
            .after_help("text files end at the first Ctrl-Z, binary files (bin,i2l,obj,sav,sys) keep every block;
existing files with the same name are overwritten")
    );
    main_cmd = main_cmd.subcommand(
        Command::new("dump")
            .arg(Arg::new("block").short('b').long("block").help("logical block number")
                .value_name("BLOCK")
                .required(true))
            .arg(dimg_arg(false))
            .about("write a hex dump of one block to stdout")
            .after_help([IN_HELP,"\n\n",ORDER_HELP].concat())
    );
    main_cmd = main_cmd.subcommand(
        Command::new("completions")
            .arg(Arg::new("shell").short('s').long("shell").help("shell target for completions")
                .value_name("SHELL")
                .required(true)
                .value_parser(["bash","elv","fish","ps1","zsh"]))
            .about("write completions script to stdout")
    );
    main_cmd
}
