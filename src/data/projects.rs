//! The project archive.
//!
//! Everything here is compiled in and immutable; the UI only ever borrows it.

use std::fmt;

/// One piece of a project write-up, rendered in order by the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentBlock {
    /// Markdown prose
    Text(&'static str),
    /// Source listing with an optional language tag
    Code {
        language: Option<&'static str>,
        source: &'static str,
    },
    /// Placeholder for an illustration the terminal can't show
    Image { alt: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// URL slug, unique across the archive
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub content: &'static [ContentBlock],
    pub github_link: &'static str,
}

impl Project {
    pub fn uses(&self, tech: &str) -> bool {
        self.tech_stack.iter().any(|t| *t == tech)
    }
}

/// Look up a project by its slug
pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Technologies that put a project under the Web filter
const WEB_STACK: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "NestJS",
    "Django",
    "Tailwind CSS",
    "HTTP/1.1",
    "WebSocket",
];

/// Archive filter shown in the filter bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    CCpp,
    Python,
    Web,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::CCpp,
        ProjectFilter::Python,
        ProjectFilter::Web,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "ALL",
            ProjectFilter::CCpp => "C/C++",
            ProjectFilter::Python => "Python",
            ProjectFilter::Web => "Web",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::CCpp => project.uses("C") || project.uses("C++"),
            ProjectFilter::Python => project.uses("Python") || project.uses("Django"),
            ProjectFilter::Web => WEB_STACK.iter().any(|tech| project.uses(tech)),
        }
    }

    pub fn next(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Parse the short CLI form (`all`, `c`, `python`, `web`)
    pub fn from_cli(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "all" => Some(ProjectFilter::All),
            "c" | "cpp" | "c/c++" => Some(ProjectFilter::CCpp),
            "python" | "py" => Some(ProjectFilter::Python),
            "web" => Some(ProjectFilter::Web),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projects matching `filter`, in archive order
pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "minishell",
        title: "Minishell",
        short_description:
            "A minimal bash-like shell implementation with pipes, redirections, and built-in commands.",
        tech_stack: &["C", "Unix", "Shell", "Makefile"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nMinishell is a simplified bash-like shell written in C, built to understand how shells work under the hood.",
            ),
            ContentBlock::Text(
                "## Features\n\n- Command execution with absolute and relative paths\n- Built-ins: echo, cd, pwd, export, unset, env, exit\n- Pipes and redirections (|, <, >, >>)\n- Environment variable expansion ($VAR)\n- Signal handling (Ctrl+C, Ctrl+D, Ctrl+\\)",
            ),
            ContentBlock::Code {
                language: Some("c"),
                source: r#"int execute_command(t_cmd *cmd, t_env *env)
{
    pid_t pid;
    int   status;

    pid = fork();
    if (pid == 0)
    {
        if (cmd->redirections)
            apply_redirections(cmd->redirections);
        execve(cmd->path, cmd->args, env->envp);
        exit(127);
    }
    waitpid(pid, &status, 0);
    return (WEXITSTATUS(status));
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/minishell",
    },
    Project {
        id: "webserv",
        title: "Webserv",
        short_description:
            "A fully functional HTTP server written in C++98 that handles non-blocking I/O, CGI execution, and configuration parsing.",
        tech_stack: &["C++", "Network Programming", "HTTP/1.1", "Sockets", "CGI"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nWebserv is an HTTP/1.1 server modelled on NGINX. A single `poll()` loop multiplexes every client socket.",
            ),
            ContentBlock::Code {
                language: Some("cpp"),
                source: r#"while (true) {
    int ret = poll(fds.data(), fds.size(), -1);
    if (ret < 0) throw std::runtime_error("Poll error");

    for (size_t i = 0; i < fds.size(); i++) {
        if (fds[i].revents & POLLIN) {
            if (is_server_socket(fds[i].fd))
                accept_new_client(fds);
            else
                handle_client_request(fds[i].fd);
        }
    }
}"#,
            },
            ContentBlock::Text(
                "## Installation & Usage\n\n1. **Compile:** `make`\n2. **Run:** `./webserv config/default.conf`",
            ),
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/webserv",
    },
    Project {
        id: "philosophers",
        title: "Philosophers",
        short_description:
            "A multi-threaded dining philosophers problem solution using mutexes and semaphores.",
        tech_stack: &["C", "Threads", "Mutexes", "Unix"],
        content: &[
            ContentBlock::Text(
                "## The Dining Philosophers Problem\n\nN philosophers sit at a round table with N forks. Each needs two forks to eat. The challenge is to prevent deadlock and starvation.",
            ),
            ContentBlock::Text(
                "## Implementation\n\n- Each philosopher is a separate thread\n- Forks are protected by mutexes\n- A monitoring thread checks for deaths\n- Precise timing using gettimeofday()",
            ),
            ContentBlock::Code {
                language: Some("c"),
                source: r#"void *philosopher_routine(void *arg)
{
    t_philo *philo = (t_philo *)arg;

    while (!simulation_ended(philo->data))
    {
        take_forks(philo);
        eat(philo);
        drop_forks(philo);
        sleep_think(philo);
    }
    return (NULL);
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/philosophers",
    },
    Project {
        id: "deepdive-platform",
        title: "DeepDive Platform",
        short_description:
            "A full-stack learning platform for developers featuring interactive tutorials and collaborative coding.",
        tech_stack: &["React", "TypeScript", "Node.js", "PostgreSQL", "AWS"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nDeepDive Platform is the flagship product of DeepDiveNerds: an interactive learning platform for mastering complex programming concepts hands-on.",
            ),
            ContentBlock::Text(
                "## Key Features\n\n- Interactive code editor with real-time execution\n- Progress tracking and achievements\n- Collaborative coding sessions\n- Community forums",
            ),
            ContentBlock::Code {
                language: Some("typescript"),
                source: r#"export class CodeExecutor {
  private sandbox: DockerSandbox;

  async execute(code: string, language: Language): Promise<ExecutionResult> {
    const container = await this.sandbox.createContainer(language);
    try {
      const result = await container.run(code, { timeout: 10000 });
      return { success: true, output: result.stdout, errors: result.stderr };
    } finally {
      await container.cleanup();
    }
  }
}"#,
            },
        ],
        github_link: "https://www.linkedin.com/company/deep-dive-nerds/",
    },
    Project {
        id: "ft-transcendence",
        title: "ft_transcendence",
        short_description:
            "A real-time multiplayer Pong game with user authentication, chat, and matchmaking system.",
        tech_stack: &["TypeScript", "NestJS", "React", "PostgreSQL", "WebSocket"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nThe final common-core project: a full-stack web application built around real-time multiplayer Pong.",
            ),
            ContentBlock::Text(
                "## Features\n\n- Real-time Pong with matchmaking\n- OAuth 2.0 login and 2FA\n- Chat with channels and DMs\n- Game history and leaderboards",
            ),
            ContentBlock::Code {
                language: Some("typescript"),
                source: r#"@WebSocketGateway({ namespace: 'game' })
export class GameGateway {
  @SubscribeMessage('paddle_move')
  handlePaddleMove(@ConnectedSocket() client: Socket, @MessageBody() data: PaddleInput) {
    const game = this.gameService.getGame(data.gameId);
    game.updatePaddle(client.id, data.position);
    this.server.to(data.gameId).emit('game_state', game.getState());
  }
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/ft_transcendence",
    },
    Project {
        id: "so_long",
        title: "so_long",
        short_description:
            "A small 2D game built with MiniLibX involving map parsing, window management, and basic event handling.",
        tech_stack: &["C", "MiniLibX", "Graphics", "Game Dev"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nA top-down 2D game: collect every item on a `.ber` map, then reach the exit in as few moves as possible.",
            ),
            ContentBlock::Image {
                alt: "so_long gameplay screenshot",
            },
            ContentBlock::Text(
                "## Map Validation\n\n- Rectangular and closed by walls\n- Exactly one exit and one start\n- A valid path to every collectible (flood fill)",
            ),
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/so_long",
    },
    Project {
        id: "push_swap",
        title: "push_swap",
        short_description:
            "A highly efficient sorting algorithm project using two stacks and a limited set of instructions.",
        tech_stack: &["C", "Algorithms", "Data Structures", "Complexity Analysis"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nSort a stack of integers with a restricted instruction set using the lowest possible number of moves.",
            ),
            ContentBlock::Text(
                "## Key Features\n\n- **Two Stacks:** only stack A and stack B\n- **Instruction Set:** `sa`, `sb`, `ss`, `pa`, `pb`, `ra`, `rb`, `rr`, `rra`, `rrb`, `rrr`\n- **Targets:** 100 numbers in < 700 operations, 500 numbers in < 5500",
            ),
            ContentBlock::Code {
                language: Some("c"),
                source: r#"void    sort_stacks(t_stack **a, t_stack **b)
{
    if (stack_size(*a) <= 5)
        simple_sort(a, b);
    else
    {
        while (stack_size(*a) > 3)
            pb(a, b);
        sort_three(a);
        while (*b)
        {
            init_nodes_a(*a, *b);
            init_nodes_b(*a, *b);
            move_nodes(a, b);
        }
    }
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/push_swap",
    },
    Project {
        id: "get_next_line",
        title: "get_next_line",
        short_description:
            "A function that reads a file line by line, introducing the concept of static variables in C.",
        tech_stack: &["C", "File I/O", "Memory Management", "Static Variables"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nReturn one line per call from any file descriptor, keeping leftover bytes between calls in a static buffer.",
            ),
            ContentBlock::Code {
                language: Some("c"),
                source: r#"char    *get_next_line(int fd)
{
    static char *stash;
    char        *line;

    if (fd < 0 || BUFFER_SIZE <= 0)
        return (NULL);
    stash = read_to_stash(fd, stash);
    if (!stash)
        return (NULL);
    line = extract_line(stash);
    stash = trim_stash(stash);
    return (line);
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/get_next_line",
    },
    Project {
        id: "ft_printf",
        title: "ft_printf",
        short_description:
            "A custom implementation of the standard C printf function using variadic arguments.",
        tech_stack: &["C", "Variadic Functions", "String Manipulation"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nA reimplementation of `printf` supporting `%c %s %p %d %i %u %x %X %%`.",
            ),
            ContentBlock::Code {
                language: Some("c"),
                source: r#"int ft_printf(const char *format, ...)
{
    va_list args;
    int     count;

    va_start(args, format);
    count = 0;
    while (*format)
    {
        if (*format == '%' && *(format + 1))
            count += dispatch(*(++format), args);
        else
            count += ft_putchar(*format);
        format++;
    }
    va_end(args);
    return (count);
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/ft_printf",
    },
    Project {
        id: "libft",
        title: "Libft",
        short_description:
            "A foundational C library recreating standard libc functions to be used in future projects.",
        tech_stack: &["C", "Makefile", "Memory Management", "Linked Lists"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nA static library of libc re-implementations plus string helpers and a singly linked list API.",
            ),
            ContentBlock::Text(
                "## Contents\n\n- **Libc:** `ft_memset`, `ft_strlcpy`, `ft_atoi`, ...\n- **Extras:** `ft_split`, `ft_itoa`, `ft_strtrim`\n- **Lists:** `ft_lstnew`, `ft_lstadd_back`, `ft_lstmap`",
            ),
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/libft",
    },
    Project {
        id: "2048-wong-kar-wai",
        title: "2048",
        short_description:
            "A console-based recreation of the classic 2048 game featuring a polished UI built with the ncurses library.",
        tech_stack: &["C", "ncurses", "UI Design", "Game Logic"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nA rush project: the 2048 sliding puzzle in the terminal, with resize handling and a configurable win value.",
            ),
            ContentBlock::Code {
                language: Some("c"),
                source: r#"static int  slide_row(int *row, int size)
{
    int moved = 0;

    moved |= compact(row, size);
    moved |= merge(row, size);
    moved |= compact(row, size);
    return (moved);
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/2048-wong-kar-wai",
    },
    Project {
        id: "born2beroot",
        title: "Born2BeRoot",
        short_description:
            "A rigorous system administration project focused on virtualization, LVM, and server security standards.",
        tech_stack: &["Linux (Debian)", "Bash", "Virtualization", "LVM", "SSH"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nSet up a minimal Debian server VM with strict security protocols, encrypted LVM partitions and no GUI.",
            ),
            ContentBlock::Text(
                "## Features\n\n- **Security:** password policy, sudo logging, UFW on port 4242\n- **SSH:** root login forbidden\n- **Monitoring:** a script broadcasting system stats with `wall`",
            ),
            ContentBlock::Code {
                language: Some("bash"),
                source: r##"#!/bin/bash
arch=$(uname -a)
cpuf=$(grep "physical id" /proc/cpuinfo | wc -l)
ram_use=$(free -m | grep "Mem:" | awk '{print $3}')
disk_percent=$(df -h / | awk 'NR==2 {print $5}')
wall "#Architecture: $arch
#CPU physical : $cpuf
#Memory Usage: ${ram_use}MB
#Disk Usage: $disk_percent""##,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/Born2BeRoot",
    },
    Project {
        id: "qtech_cloud_migration",
        title: "QTech Cloud Migration",
        short_description:
            "A hybrid DevOps project combining AWS cloud infrastructure (ASG, ALB, S3) with rigorous on-premise Linux administration.",
        tech_stack: &["AWS", "Linux (RHEL)", "Bash", "Apache", "Networking"],
        content: &[
            ContentBlock::Text(
                "## Cloud Architecture (AWS)\n\n- **Auto Scaling & Load Balancing:** an ALB in front of an ASG scaling on CPU > 50%\n- **Security:** EC2 instances only accept traffic from the ALB\n- **Storage:** a private S3 bucket accessed through IAM roles",
            ),
            ContentBlock::Text(
                "## Internal System Administration\n\n- Department groups (HR, Dev, Ops, IT)\n- Sticky bit and SGID (3770) on shared directories\n- Zero-touch provisioning through user data scripts",
            ),
            ContentBlock::Code {
                language: Some("bash"),
                source: r#"#!/bin/bash
DEST_BUCKET="qtech-s3-htu"
for DEPT in hr dev ops management it; do
    ARCHIVE_NAME="${DEPT}_$(date +%Y-%m-%d).tar.gz"
    tar -czf "/tmp/$ARCHIVE_NAME" -C /company "$DEPT" 2>/dev/null \
        && aws s3 cp "/tmp/$ARCHIVE_NAME" "s3://$DEST_BUCKET/$ARCHIVE_NAME"
done"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/qtech_migration",
    },
    Project {
        id: "django-blog",
        title: "Full-Featured Django Blog Website",
        short_description:
            "A robust full-stack blog application with secure authentication and CRUD operations, styled with Tailwind CSS and custom animations.",
        tech_stack: &["Django", "Python", "PostgreSQL", "Tailwind CSS", "JavaScript"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nA complete blog application on the **Django** MTV architecture with a **Tailwind CSS** frontend.",
            ),
            ContentBlock::Text(
                "## Core Features\n\n- Registration, login and password reset by email\n- Profile pictures handled via Pillow\n- Full CRUD on your own posts",
            ),
            ContentBlock::Code {
                language: Some("python"),
                source: r#"DATABASES = {
    'default': {
        'ENGINE': 'django.db.backends.postgresql',
        'NAME': 'capstone_blog_db',
        'HOST': 'localhost',
        'PORT': '5432',
    }
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/Blog-Website-Django",
    },
    Project {
        id: "cub3d",
        title: "Cub3D",
        short_description:
            "A 3D graphical maze game using Raycasting (Wolfenstein 3D style) built with C and MiniLibX.",
        tech_stack: &["C", "MiniLibX", "Raycasting", "Mathematics", "Algorithms"],
        content: &[
            ContentBlock::Text(
                "## Project Overview\n\nA first-person maze renderer in the style of Wolfenstein 3D, driven by a DDA raycaster.",
            ),
            ContentBlock::Image {
                alt: "Raycasted corridor with textured walls",
            },
            ContentBlock::Code {
                language: Some("c"),
                source: r#"while (!hit)
{
    if (ray->side_x < ray->side_y)
    {
        ray->side_x += ray->delta_x;
        ray->map_x += ray->step_x;
        ray->side = 0;
    }
    else
    {
        ray->side_y += ray->delta_y;
        ray->map_y += ray->step_y;
        ray->side = 1;
    }
    hit = map[ray->map_y][ray->map_x] == '1';
}"#,
            },
        ],
        github_link: "https://github.com/Abdalrhman-Olimat/cub3d",
    },
];
